use std::fmt;

use serde::{Deserialize, Serialize};

/// Hotel chain brands, declared in brand-code order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Brand {
    Tower,
    Luxor,
    Worldwide,
    American,
    Festival,
    Imperial,
    Continental,
}

impl Brand {
    pub const fn count() -> usize {
        7
    }

    /// One-based code used for deterministic tie breaks.
    pub fn code(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn iter() -> BrandIter {
        BrandIter::new()
    }
}

impl TryFrom<usize> for Brand {
    type Error = usize;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Brand::Tower),
            1 => Ok(Brand::Luxor),
            2 => Ok(Brand::Worldwide),
            3 => Ok(Brand::American),
            4 => Ok(Brand::Festival),
            5 => Ok(Brand::Imperial),
            6 => Ok(Brand::Continental),
            _ => Err(index),
        }
    }
}

impl From<Brand> for usize {
    fn from(brand: Brand) -> Self {
        brand as usize
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Brand::Tower => "Tower",
            Brand::Luxor => "Luxor",
            Brand::Worldwide => "Worldwide",
            Brand::American => "American",
            Brand::Festival => "Festival",
            Brand::Imperial => "Imperial",
            Brand::Continental => "Continental",
        };
        write!(f, "{}", name)
    }
}

pub struct BrandIter {
    index: usize,
}

impl BrandIter {
    fn new() -> Self {
        BrandIter { index: 0 }
    }
}

impl Iterator for BrandIter {
    type Item = Brand;

    fn next(&mut self) -> Option<Self::Item> {
        let result = Brand::try_from(self.index).ok();
        self.index += 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_follows_brand_code_order() {
        let brands: Vec<Brand> = Brand::iter().collect();
        assert_eq!(brands.len(), Brand::count());
        assert_eq!(brands.first(), Some(&Brand::Tower));
        assert_eq!(brands.last(), Some(&Brand::Continental));

        for pair in brands.windows(2) {
            assert!(pair[0].code() < pair[1].code());
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_index_conversion() {
        for brand in Brand::iter() {
            assert_eq!(Brand::try_from(usize::from(brand)), Ok(brand));
        }
        assert_eq!(Brand::try_from(7), Err(7));
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Brand::Worldwide).unwrap(), "\"WORLDWIDE\"");
        let brand: Brand = serde_json::from_str("\"CONTINENTAL\"").unwrap();
        assert_eq!(brand, Brand::Continental);
        assert_eq!(Brand::Festival.to_string(), "Festival");
    }
}

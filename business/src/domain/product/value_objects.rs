use serde::{Deserialize, Serialize};

/// External sources of product data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Retailer {
    Amazon,
    Ebay,
}

impl std::fmt::Display for Retailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Retailer::Amazon => write!(f, "amazon"),
            Retailer::Ebay => write!(f, "ebay"),
        }
    }
}

impl std::str::FromStr for Retailer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "amazon" => Ok(Retailer::Amazon),
            "ebay" => Ok(Retailer::Ebay),
            _ => Err(format!("Invalid retailer: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dress,
    Top,
    Bottom,
    Accessory,
    Shoes,
    Other,
}

impl Category {
    /// Classifies a free-text retailer category or browse-node name.
    /// Unmapped labels fall back to `Other`.
    pub fn from_source_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("dress") || label.contains("gown") {
            Category::Dress
        } else if label.contains("shirt")
            || label.contains("top")
            || label.contains("blouse")
            || label.contains("sweater")
            || label.contains("jacket")
        {
            Category::Top
        } else if label.contains("pant")
            || label.contains("jean")
            || label.contains("skirt")
            || label.contains("short")
            || label.contains("bottom")
        {
            Category::Bottom
        } else if label.contains("shoe")
            || label.contains("boot")
            || label.contains("sneaker")
            || label.contains("heel")
            || label.contains("sandal")
        {
            Category::Shoes
        } else if label.contains("accessor")
            || label.contains("jewelry")
            || label.contains("bag")
            || label.contains("belt")
            || label.contains("hat")
            || label.contains("scarf")
        {
            Category::Accessory
        } else {
            Category::Other
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Dress => write!(f, "dress"),
            Category::Top => write!(f, "top"),
            Category::Bottom => write!(f, "bottom"),
            Category::Accessory => write!(f, "accessory"),
            Category::Shoes => write!(f, "shoes"),
            Category::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dress" => Ok(Category::Dress),
            "top" => Ok(Category::Top),
            "bottom" => Ok(Category::Bottom),
            "accessory" => Ok(Category::Accessory),
            "shoes" => Ok(Category::Shoes),
            "other" => Ok(Category::Other),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    InStock,
    OutOfStock,
    PreOrder,
    Unknown,
}

impl Availability {
    /// Classifies a retailer availability message or status code.
    /// Out-of-stock and pre-order branches run before the in-stock branch
    /// so labels like "currently unavailable" never classify as in stock.
    pub fn from_source_label(label: &str) -> Self {
        let label = label.to_lowercase().replace(['_', '-'], " ");
        if label.contains("pre order") || label.contains("preorder") {
            Availability::PreOrder
        } else if label.contains("out of stock")
            || label.contains("unavailable")
            || label.contains("sold out")
        {
            Availability::OutOfStock
        } else if label.contains("in stock") || label.contains("available") {
            Availability::InStock
        } else {
            Availability::Unknown
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::InStock => write!(f, "in-stock"),
            Availability::OutOfStock => write!(f, "out-of-stock"),
            Availability::PreOrder => write!(f, "pre-order"),
            Availability::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-stock" => Ok(Availability::InStock),
            "out-of-stock" => Ok(Availability::OutOfStock),
            "pre-order" => Ok(Availability::PreOrder),
            "unknown" => Ok(Availability::Unknown),
            _ => Err(format!("Invalid availability: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_retailer_display_and_parse() {
        for retailer in [Retailer::Amazon, Retailer::Ebay] {
            let parsed: Retailer = retailer.to_string().parse().unwrap();
            assert_eq!(parsed, retailer);
        }
    }

    #[test]
    fn should_reject_unknown_retailer() {
        assert!("walmart".parse::<Retailer>().is_err());
    }

    #[test]
    fn should_classify_source_categories() {
        assert_eq!(Category::from_source_label("Evening Gowns"), Category::Dress);
        assert_eq!(Category::from_source_label("T-Shirts & Tops"), Category::Top);
        assert_eq!(Category::from_source_label("Women's Jeans"), Category::Bottom);
        assert_eq!(Category::from_source_label("Running Sneakers"), Category::Shoes);
        assert_eq!(Category::from_source_label("Handbags"), Category::Accessory);
    }

    #[test]
    fn should_fall_back_to_other_for_unmapped_category() {
        assert_eq!(Category::from_source_label("Garden Tools"), Category::Other);
        assert_eq!(Category::from_source_label(""), Category::Other);
    }

    #[test]
    fn should_classify_availability_labels() {
        assert_eq!(
            Availability::from_source_label("In Stock."),
            Availability::InStock
        );
        assert_eq!(
            Availability::from_source_label("IN_STOCK"),
            Availability::InStock
        );
        assert_eq!(
            Availability::from_source_label("Currently unavailable"),
            Availability::OutOfStock
        );
        assert_eq!(
            Availability::from_source_label("Sold out"),
            Availability::OutOfStock
        );
        assert_eq!(
            Availability::from_source_label("Available for Pre-order"),
            Availability::PreOrder
        );
    }

    #[test]
    fn should_fall_back_to_unknown_availability() {
        assert_eq!(
            Availability::from_source_label("ships soon"),
            Availability::Unknown
        );
    }
}

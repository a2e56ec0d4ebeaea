use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::ErrorKind;

pub mod claim;
pub mod report;

pub use claim::{Claim, ClaimStatus, Notification};
pub use report::{
    ImageMeta, ImageUpload, ItemDetails, ItemReport, NewItemReport, ReportError, ReportStatus,
};

/// Whether a report describes something lost or something found
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Lost,
    Found,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Lost => "lost",
            ReportKind::Found => "found",
        }
    }

    /// Label shown next to the location input
    pub fn location_label(&self) -> &'static str {
        match self {
            ReportKind::Lost => "Last Seen Location",
            ReportKind::Found => "Found Location",
        }
    }

    pub fn location_help_text(&self) -> &'static str {
        match self {
            ReportKind::Lost => "Where did you last see the item?",
            ReportKind::Found => "Where did you find the item?",
        }
    }

    pub fn location_placeholder(&self) -> &'static str {
        match self {
            ReportKind::Lost => "Enter last seen location",
            ReportKind::Found => "Enter found location",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lost" => Ok(ReportKind::Lost),
            "found" => Ok(ReportKind::Found),
            _ => Err(ErrorKind::InvalidChoice),
        }
    }
}

/// Category of a reported item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Electronics,
    Clothing,
    Accessories,
    Documents,
    Bags,
    Jewelry,
    Keys,
    Wallet,
    Phone,
    Laptop,
    Books,
    #[serde(alias = "sports-equipment")]
    Sports,
    Pet,
    Other,
}

impl ItemType {
    pub const ALL: [ItemType; 14] = [
        ItemType::Electronics,
        ItemType::Clothing,
        ItemType::Accessories,
        ItemType::Documents,
        ItemType::Bags,
        ItemType::Jewelry,
        ItemType::Keys,
        ItemType::Wallet,
        ItemType::Phone,
        ItemType::Laptop,
        ItemType::Books,
        ItemType::Sports,
        ItemType::Pet,
        ItemType::Other,
    ];

    /// Value submitted by forms and stored in snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Electronics => "electronics",
            ItemType::Clothing => "clothing",
            ItemType::Accessories => "accessories",
            ItemType::Documents => "documents",
            ItemType::Bags => "bags",
            ItemType::Jewelry => "jewelry",
            ItemType::Keys => "keys",
            ItemType::Wallet => "wallet",
            ItemType::Phone => "phone",
            ItemType::Laptop => "laptop",
            ItemType::Books => "books",
            ItemType::Sports => "sports",
            ItemType::Pet => "pet",
            ItemType::Other => "other",
        }
    }

    /// Human-facing label for select inputs
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Electronics => "Electronics",
            ItemType::Clothing => "Clothing",
            ItemType::Accessories => "Accessories",
            ItemType::Documents => "Documents",
            ItemType::Bags => "Bags & Luggage",
            ItemType::Jewelry => "Jewelry",
            ItemType::Keys => "Keys",
            ItemType::Wallet => "Wallet/Purse",
            ItemType::Phone => "Mobile Phone",
            ItemType::Laptop => "Laptop/Tablet",
            ItemType::Books => "Books/Notebooks",
            ItemType::Sports => "Sports Equipment",
            ItemType::Pet => "Pet",
            ItemType::Other => "Other",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value == "sports-equipment" {
            return Ok(ItemType::Sports);
        }
        ItemType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
            .ok_or(ErrorKind::InvalidChoice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_type_parses_every_choice() {
        for item_type in ItemType::ALL {
            assert_eq!(item_type.as_str().parse::<ItemType>(), Ok(item_type));
        }
    }

    #[test]
    fn item_type_accepts_sports_equipment_alias() {
        assert_eq!("sports-equipment".parse::<ItemType>(), Ok(ItemType::Sports));
        let parsed: ItemType = serde_json::from_str("\"sports-equipment\"").unwrap();
        assert_eq!(parsed, ItemType::Sports);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"sports\"");
    }

    #[test]
    fn item_type_rejects_unknown_and_case_variants() {
        assert_eq!("vehicle".parse::<ItemType>(), Err(ErrorKind::InvalidChoice));
        assert_eq!("Wallet".parse::<ItemType>(), Err(ErrorKind::InvalidChoice));
        assert_eq!("".parse::<ItemType>(), Err(ErrorKind::InvalidChoice));
    }

    #[test]
    fn location_labels_differ_by_kind() {
        assert_eq!(ReportKind::Lost.location_label(), "Last Seen Location");
        assert_eq!(ReportKind::Found.location_label(), "Found Location");
        assert!(ReportKind::Lost.location_help_text().to_lowercase().contains("last see"));
        assert!(ReportKind::Found.location_help_text().to_lowercase().contains("find"));
    }
}

use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, str::FromStr};
use thiserror::Error;

use crate::{DEFAULT_QUANTITY, utils::quantity::deserialize_quantity};

#[derive(Debug, Error, PartialEq)]
pub enum LabelOptionError {
    #[error("Invalid paper type: {0}")]
    InvalidPaperType(String),

    #[error("Invalid label size: {0}")]
    InvalidSize(String),

    #[error("Invalid label shape: {0}")]
    InvalidShape(String),

    #[error("Invalid coating: {0}")]
    InvalidCoating(String),

    #[error("Invalid special processing option: {0}")]
    InvalidSpecialProcessing(String),

    #[error("Invalid printing security option: {0}")]
    InvalidPrintingSecurity(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaperType {
    #[default]
    Waterproof,
}

impl PaperType {
    pub const ALL: [PaperType; 1] = [PaperType::Waterproof];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaperType::Waterproof => "waterproof",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaperType::Waterproof => "Waterproof Paper",
        }
    }
}

impl fmt::Display for PaperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PaperType {
    type Err = LabelOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaperType::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| LabelOptionError::InvalidPaperType(s.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LabelSize {
    /// Two 90mm x 120mm panels.
    #[default]
    Standard,
}

impl LabelSize {
    pub const ALL: [LabelSize; 1] = [LabelSize::Standard];

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelSize::Standard => "standard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LabelSize::Standard => "90mm*120mm * 2",
        }
    }
}

impl fmt::Display for LabelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LabelSize {
    type Err = LabelOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabelSize::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| LabelOptionError::InvalidSize(s.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LabelShape {
    #[default]
    Rectangle,
    Square,
}

impl LabelShape {
    pub const ALL: [LabelShape; 2] = [LabelShape::Rectangle, LabelShape::Square];

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelShape::Rectangle => "rectangle",
            LabelShape::Square => "square",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LabelShape::Rectangle => "Rectangle",
            LabelShape::Square => "Square",
        }
    }
}

impl fmt::Display for LabelShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LabelShape {
    type Err = LabelOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabelShape::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| LabelOptionError::InvalidShape(s.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Coating {
    #[default]
    Glossy,
    Matte,
}

impl Coating {
    pub const ALL: [Coating; 2] = [Coating::Glossy, Coating::Matte];

    pub fn as_str(&self) -> &'static str {
        match self {
            Coating::Glossy => "glossy",
            Coating::Matte => "matte",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Coating::Glossy => "Glossy",
            Coating::Matte => "Matte",
        }
    }
}

impl fmt::Display for Coating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Coating {
    type Err = LabelOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coating::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| LabelOptionError::InvalidCoating(s.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialProcessing {
    GoldStamp,
    Embossing,
    DottedLine,
    VariableCode,
}

impl SpecialProcessing {
    pub const ALL: [SpecialProcessing; 4] = [
        SpecialProcessing::GoldStamp,
        SpecialProcessing::Embossing,
        SpecialProcessing::DottedLine,
        SpecialProcessing::VariableCode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialProcessing::GoldStamp => "gold-stamp",
            SpecialProcessing::Embossing => "embossing",
            SpecialProcessing::DottedLine => "dotted-line",
            SpecialProcessing::VariableCode => "variable-code",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpecialProcessing::GoldStamp => "Gold/Silver Stamping",
            SpecialProcessing::Embossing => "Embossing",
            SpecialProcessing::DottedLine => "Dotted Line",
            SpecialProcessing::VariableCode => "Variable Code (Digital Services Required)",
        }
    }

    /// Options that only make sense with the digital UID service enabled.
    pub fn requires_digital_service(&self) -> bool {
        matches!(self, SpecialProcessing::VariableCode)
    }
}

impl fmt::Display for SpecialProcessing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SpecialProcessing {
    type Err = LabelOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpecialProcessing::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| LabelOptionError::InvalidSpecialProcessing(s.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum PrintingSecurity {
    LaserScratch,
    TmaPattern,
    VisualCode,
    AntiCopyPattern,
    InvisibleInk,
}

impl PrintingSecurity {
    pub const ALL: [PrintingSecurity; 5] = [
        PrintingSecurity::LaserScratch,
        PrintingSecurity::TmaPattern,
        PrintingSecurity::VisualCode,
        PrintingSecurity::AntiCopyPattern,
        PrintingSecurity::InvisibleInk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrintingSecurity::LaserScratch => "laser-scratch",
            PrintingSecurity::TmaPattern => "tma-pattern",
            PrintingSecurity::VisualCode => "visual-code",
            PrintingSecurity::AntiCopyPattern => "anti-copy-pattern",
            PrintingSecurity::InvisibleInk => "invisible-ink",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrintingSecurity::LaserScratch => "Laser Scratch",
            PrintingSecurity::TmaPattern => "TMA Pattern",
            PrintingSecurity::VisualCode => "Visual Code",
            PrintingSecurity::AntiCopyPattern => "Anti-Copy Pattern",
            PrintingSecurity::InvisibleInk => "Invisible Ink",
        }
    }
}

impl fmt::Display for PrintingSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PrintingSecurity {
    type Err = LabelOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrintingSecurity::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| LabelOptionError::InvalidPrintingSecurity(s.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LabelOptions {
    pub paper_type: PaperType,
    pub size: LabelSize,
    pub shape: LabelShape,
    pub coating: Coating,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DigitalService {
    pub enabled: bool,
    pub platform_fee: bool,
    pub domain_binding: bool,
}

/// A single quotation request. Label options and add-on flags are carried
/// through to the quote but do not change the price.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OrderConfiguration {
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: u64,
    pub label: LabelOptions,
    pub special_processing: BTreeSet<SpecialProcessing>,
    pub printing_security: BTreeSet<PrintingSecurity>,
    pub digital_service: DigitalService,
    pub certification: bool,
}

impl OrderConfiguration {
    /// Selected options that need the digital service but were ordered without it.
    pub fn unmet_digital_requirements(&self) -> Vec<SpecialProcessing> {
        if self.digital_service.enabled {
            return vec![];
        }

        self.special_processing
            .iter()
            .copied()
            .filter(|option| option.requires_digital_service())
            .collect()
    }
}

impl Default for OrderConfiguration {
    fn default() -> Self {
        Self {
            quantity: DEFAULT_QUANTITY,
            label: LabelOptions::default(),
            special_processing: BTreeSet::new(),
            printing_security: BTreeSet::new(),
            digital_service: DigitalService::default(),
            certification: false,
        }
    }
}

//! Output model flavors.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The family of Python declarations a generation run emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFlavor {
    /// Validated record, pydantic 1.x `BaseModel`.
    #[default]
    PydanticBaseModel,
    /// Validated record, pydantic 2.x `BaseModel`.
    PydanticV2BaseModel,
    /// Plain value object, `dataclasses.dataclass`.
    Dataclass,
    /// Dictionary-shaped, `typing.TypedDict`.
    TypedDict,
    /// Lightweight struct, `msgspec.Struct`.
    MsgspecStruct,
}

impl OutputFlavor {
    pub const ALL: [OutputFlavor; 5] = [
        OutputFlavor::PydanticBaseModel,
        OutputFlavor::PydanticV2BaseModel,
        OutputFlavor::Dataclass,
        OutputFlavor::TypedDict,
        OutputFlavor::MsgspecStruct,
    ];

    /// The identifier users select the flavor by.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFlavor::PydanticBaseModel => "pydantic.BaseModel",
            OutputFlavor::PydanticV2BaseModel => "pydantic_v2.BaseModel",
            OutputFlavor::Dataclass => "dataclasses.dataclass",
            OutputFlavor::TypedDict => "typing.TypedDict",
            OutputFlavor::MsgspecStruct => "msgspec.Struct",
        }
    }

    pub fn is_pydantic_v2(self) -> bool {
        self == OutputFlavor::PydanticV2BaseModel
    }
}

impl fmt::Display for OutputFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFlavor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .ok_or_else(|| Error::UnsupportedFlavor(s.to_string()))
    }
}

impl TryFrom<String> for OutputFlavor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OutputFlavor> for String {
    fn from(flavor: OutputFlavor) -> Self {
        flavor.as_str().to_string()
    }
}

// JSON schema types matching the natives DB file layout.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Top-level file wrapper
// ---------------------------------------------------------------------------

/// The raw natives DB: module name → (hash key → native entry).
/// Key order is the schema order and must be preserved through emission.
#[derive(Deserialize)]
#[serde(transparent)]
pub struct NativeDb {
    pub modules: IndexMap<String, IndexMap<String, NativeEntry>>,
}

// ---------------------------------------------------------------------------
// Native entry
// ---------------------------------------------------------------------------

#[derive(Deserialize, Clone)]
pub struct NativeEntry {
    /// Native name as stored in the DB (UPPER_SNAKE, possibly `_`-prefixed).
    pub name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub params: Vec<ParamEntry>,
    /// Return type(s). Only the first is authoritative; extras are legacy
    /// variants kept for documentation.
    #[serde(deserialize_with = "deser_one_or_many")]
    pub results: Vec<NativeType>,
    #[serde(default)]
    pub results_description: Option<String>,
}

#[derive(Deserialize, Clone)]
pub struct ParamEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub native_type: NativeType,
    #[serde(default, rename = "ref")]
    pub is_ref: bool,
    #[serde(default)]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Native type
// ---------------------------------------------------------------------------

/// The closed set of types a native can declare. An unknown type string in
/// the DB is a hard deserialization failure, not a recoverable diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum NativeType {
    Any,
    #[serde(alias = "BOOL", alias = "bool")]
    Boolean,
    #[serde(alias = "float")]
    Float,
    #[serde(alias = "int")]
    Int,
    #[serde(alias = "char*", alias = "string")]
    String,
    Vector3,
    #[serde(alias = "void")]
    Void,
    ScrHandle,
    MemoryBuffer,
    Interior,
    Object,
    Hash,
    Entity,
    Ped,
    Vehicle,
    Cam,
    FireId,
    Blip,
    Pickup,
    Player,
    CarGenerator,
    Group,
    Train,
    Weapon,
    Texture,
    TextureDict,
    CoverPoint,
    Camera,
    TaskSequence,
    ColourIndex,
    Sphere,
}

impl NativeType {
    /// Every enum member, for mapping-completeness tests.
    pub const ALL: &'static [NativeType] = &[
        NativeType::Any,
        NativeType::Boolean,
        NativeType::Float,
        NativeType::Int,
        NativeType::String,
        NativeType::Vector3,
        NativeType::Void,
        NativeType::ScrHandle,
        NativeType::MemoryBuffer,
        NativeType::Interior,
        NativeType::Object,
        NativeType::Hash,
        NativeType::Entity,
        NativeType::Ped,
        NativeType::Vehicle,
        NativeType::Cam,
        NativeType::FireId,
        NativeType::Blip,
        NativeType::Pickup,
        NativeType::Player,
        NativeType::CarGenerator,
        NativeType::Group,
        NativeType::Train,
        NativeType::Weapon,
        NativeType::Texture,
        NativeType::TextureDict,
        NativeType::CoverPoint,
        NativeType::Camera,
        NativeType::TaskSequence,
        NativeType::ColourIndex,
        NativeType::Sphere,
    ];
}

// ---------------------------------------------------------------------------
// Hash keys
// ---------------------------------------------------------------------------

/// Parse a `0x`-prefixed hex hash key into the stable native id.
pub fn parse_hash(key: &str) -> Option<u64> {
    let digits = key.strip_prefix("0x").or_else(|| key.strip_prefix("0X"))?;
    u64::from_str_radix(digits, 16).ok()
}

// ---------------------------------------------------------------------------
// Serde helpers — older DB dumps store `results` as a single string while
// newer ones use a list of legacy variants.  Accept both.
// ---------------------------------------------------------------------------

fn deser_one_or_many<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<NativeType>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(NativeType),
        Many(Vec<NativeType>),
    }
    Ok(match OneOrMany::deserialize(d)? {
        OneOrMany::One(t) => vec![t],
        OneOrMany::Many(v) => v,
    })
}

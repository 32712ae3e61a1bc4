use crate::graph::NodeDefinition;
use ahash::AHashMap;

/// Reads one field from a node's data bag. Missing fields and empty strings
/// both take the default, matching the canvas editor's falsy semantics.
fn field_or(data: &AHashMap<String, String>, name: &str, default: &str) -> String {
    match data.get(name) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => default.to_string(),
    }
}

/// Master macro defining every block field record: per-kind struct, wire field
/// names and the default literal substituted when the canvas left one blank.
macro_rules! define_block_fields {
    ( $( $(#[$meta:meta])* ($struct_name:ident, $( ($field:ident, $wire_name:literal, $default:literal) ),+ $(,)? ) ),+ $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct $struct_name {
                $( pub $field: String, )+
            }

            impl $struct_name {
                pub(crate) fn from_data(data: &AHashMap<String, String>) -> Self {
                    Self {
                        $( $field: field_or(data, $wire_name, $default), )+
                    }
                }
            }
        )+
    };
}

define_block_fields! {
    /// The contract container block. Its names label the canvas tab; the
    /// generated text carries no module header form.
    (ModuleBlock,
        (module_name, "moduleName", "my-contract"),
        (contract_name, "contractName", "my-module"),
    ),
    (UseTraitBlock,
        (trait_id, "traitId", "SP2J6ZY48GV1EZ5V2V5RB9MP66NW8H1F2K7DCRGY5.trait-name"),
    ),
    (ConstantBlock,
        (name, "name", "MY_CONSTANT"),
        (value, "value", "u100"),
    ),
    (DataVariableBlock,
        (name, "name", "my-data-var"),
        (ty, "type", "uint"),
        (initial_value, "initialValue", "u0"),
    ),
    (MapBlock,
        (name, "name", "my-map"),
        (key_type, "keyType", "{ id: uint }"),
        (value_type, "valueType", "{ value: bool }"),
    ),
    /// A let introduces one binding and scopes the rest of its branch.
    (LetBlock,
        (var_name, "varName", "my-local-var"),
        (value_expr, "valueExpr", "u0"),
    ),
    (IfElseBlock,
        (condition, "condition", "true"),
    ),
    (ReturnOkBlock,
        (value, "value", "true"),
    ),
    (ReturnErrBlock,
        (error_code, "errorCode", "u100"),
    ),
    (AssertBlock,
        (condition, "condition", "true"),
        (error_code, "errorCode", "u1"),
    ),
    (VarGetBlock,
        (var_name, "varName", "my-var"),
    ),
    (VarSetBlock,
        (var_name, "varName", "my-var"),
        (value, "value", "u0"),
    ),
    (MapGetBlock,
        (map_name, "mapName", "my-map"),
        (key, "key", "u1"),
    ),
    (MapSetBlock,
        (map_name, "mapName", "my-map"),
        (key, "key", "u1"),
        (value, "value", "true"),
    ),
    (MapDeleteBlock,
        (map_name, "mapName", "my-map"),
        (key, "key", "u1"),
    ),
    (ContractCallBlock,
        (contract_id, "contractId", ".some-contract"),
        (function_name, "functionName", "some-function"),
        (args, "args", ""),
    ),
}

/// Which definition form a function block renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionVisibility {
    Public,
    ReadOnly,
    Private,
}

impl FunctionVisibility {
    pub fn define_keyword(self) -> &'static str {
        match self {
            FunctionVisibility::Public => "define-public",
            FunctionVisibility::ReadOnly => "define-read-only",
            FunctionVisibility::Private => "define-private",
        }
    }

    fn default_name(self) -> &'static str {
        match self {
            FunctionVisibility::Public => "my-public-function",
            FunctionVisibility::ReadOnly => "my-read-only-function",
            FunctionVisibility::Private => "my-private-function",
        }
    }

    /// Read-only signatures never carry an explicit response annotation.
    pub fn annotates_return_type(self) -> bool {
        !matches!(self, FunctionVisibility::ReadOnly)
    }
}

/// One parsed `name type` parameter pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

/// A function head plus everything needed to render its definition form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBlock {
    pub visibility: FunctionVisibility,
    pub name: String,
    pub params: Vec<Param>,
    /// Optional response annotation. The one field without a default literal:
    /// absent means the signature stays bare.
    pub return_type: Option<String>,
}

impl FunctionBlock {
    fn from_data(visibility: FunctionVisibility, data: &AHashMap<String, String>) -> Self {
        Self {
            visibility,
            name: field_or(data, "name", visibility.default_name()),
            params: parse_params(data.get("params").map_or("", String::as_str)),
            return_type: data.get("returnType").filter(|v| !v.is_empty()).cloned(),
        }
    }
}

/// Splits a comma-separated parameter string into typed pairs.
///
/// Each token is whitespace-split: first word is the name, the rest joins back
/// into one type token so tuple and list types survive. A one-word token gets
/// the implicit `uint` type.
fn parse_params(raw: &str) -> Vec<Param> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let mut words = token.split_whitespace();
            let name = words.next().unwrap_or_default().to_string();
            let ty = words.collect::<Vec<_>>().join(" ");
            let ty = if ty.is_empty() { "uint".to_string() } else { ty };
            Param { name, ty }
        })
        .collect()
}

/// The typed view of one canvas block: a closed set of kinds, each carrying
/// its own field record with defaults already applied.
///
/// Parsing is total. Kinds outside the set become `Unknown` and render as
/// placeholder comments instead of failing the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Module(ModuleBlock),
    UseTrait(UseTraitBlock),
    Constant(ConstantBlock),
    DataVariable(DataVariableBlock),
    Map(MapBlock),
    Function(FunctionBlock),
    Let(LetBlock),
    IfElse(IfElseBlock),
    ReturnOk(ReturnOkBlock),
    ReturnErr(ReturnErrBlock),
    Assert(AssertBlock),
    VarGet(VarGetBlock),
    VarSet(VarSetBlock),
    MapGet(MapGetBlock),
    MapSet(MapSetBlock),
    MapDelete(MapDeleteBlock),
    ContractCall(ContractCallBlock),
    Unknown(String),
}

impl NodeKind {
    /// Parses a node's kind tag and data bag into the typed view.
    pub fn parse(node: &NodeDefinition) -> Self {
        let data = &node.data;
        match node.kind.as_str() {
            "module" => NodeKind::Module(ModuleBlock::from_data(data)),
            "useTrait" => NodeKind::UseTrait(UseTraitBlock::from_data(data)),
            "constant" => NodeKind::Constant(ConstantBlock::from_data(data)),
            "dataVariable" => NodeKind::DataVariable(DataVariableBlock::from_data(data)),
            "map" => NodeKind::Map(MapBlock::from_data(data)),
            "publicFunction" => {
                NodeKind::Function(FunctionBlock::from_data(FunctionVisibility::Public, data))
            }
            "readOnlyFunction" => {
                NodeKind::Function(FunctionBlock::from_data(FunctionVisibility::ReadOnly, data))
            }
            "privateFunction" => {
                NodeKind::Function(FunctionBlock::from_data(FunctionVisibility::Private, data))
            }
            "letBinding" => NodeKind::Let(LetBlock::from_data(data)),
            "ifElseCondition" => NodeKind::IfElse(IfElseBlock::from_data(data)),
            "returnOk" => NodeKind::ReturnOk(ReturnOkBlock::from_data(data)),
            "returnErr" => NodeKind::ReturnErr(ReturnErrBlock::from_data(data)),
            "assert" => NodeKind::Assert(AssertBlock::from_data(data)),
            "varGet" => NodeKind::VarGet(VarGetBlock::from_data(data)),
            "varSet" => NodeKind::VarSet(VarSetBlock::from_data(data)),
            "mapGet" => NodeKind::MapGet(MapGetBlock::from_data(data)),
            "mapSet" => NodeKind::MapSet(MapSetBlock::from_data(data)),
            "mapDelete" => NodeKind::MapDelete(MapDeleteBlock::from_data(data)),
            "contractCall" => NodeKind::ContractCall(ContractCallBlock::from_data(data)),
            other => NodeKind::Unknown(other.to_string()),
        }
    }
}

use std::fmt;

/// Main error type for the Pokedex reference engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Error related to type names or defensive type profiles
    TypeData(TypeDataError),
    /// Error related to the integrity of an evolution tree
    EvolutionData(EvolutionDataError),
    /// Error related to decoding an external document or configuration
    Record(RecordError),
}

/// Errors related to type lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDataError {
    /// The name is not one of the eighteen types
    InvalidType(String),
    /// A defender must have one or two types
    InvalidTypeCount(usize),
}

/// Errors related to evolution tree traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvolutionDataError {
    /// A species was reached twice while walking the tree
    RepeatedSpecies(String),
}

/// Errors related to external records and configuration documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A JSON document could not be decoded into the expected shape
    MalformedJson(String),
    /// A RON configuration document could not be decoded
    MalformedConfig(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::TypeData(err) => write!(f, "Type data error: {}", err),
            EngineError::EvolutionData(err) => write!(f, "Evolution data error: {}", err),
            EngineError::Record(err) => write!(f, "Record error: {}", err),
        }
    }
}

impl fmt::Display for TypeDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDataError::InvalidType(name) => write!(f, "Invalid type name: {:?}", name),
            TypeDataError::InvalidTypeCount(count) => {
                write!(f, "A defender has one or two types, got {}", count)
            }
        }
    }
}

impl fmt::Display for EvolutionDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvolutionDataError::RepeatedSpecies(species) => {
                write!(f, "Species {} appears more than once in the evolution tree", species)
            }
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::MalformedJson(details) => write!(f, "Malformed JSON document: {}", details),
            RecordError::MalformedConfig(details) => write!(f, "Malformed configuration: {}", details),
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for TypeDataError {}
impl std::error::Error for EvolutionDataError {}
impl std::error::Error for RecordError {}

impl From<TypeDataError> for EngineError {
    fn from(err: TypeDataError) -> Self {
        EngineError::TypeData(err)
    }
}

impl From<EvolutionDataError> for EngineError {
    fn from(err: EvolutionDataError) -> Self {
        EngineError::EvolutionData(err)
    }
}

impl From<RecordError> for EngineError {
    fn from(err: RecordError) -> Self {
        EngineError::Record(err)
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError::MalformedJson(err.to_string())
    }
}

impl From<ron::error::SpannedError> for RecordError {
    fn from(err: ron::error::SpannedError) -> Self {
        RecordError::MalformedConfig(err.to_string())
    }
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Type alias for Results using TypeDataError
pub type TypeDataResult<T> = Result<T, TypeDataError>;

/// Type alias for Results using EvolutionDataError
pub type EvolutionDataResult<T> = Result<T, EvolutionDataError>;

/// Type alias for Results using RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Tables the assistant is allowed to talk about. The set is fixed at build
/// time; there is no discovery against the warehouse.
pub const TABLES: [&str; 3] = ["customers", "pets", "favorite_icecream"];

/// Cortex model identifiers offered to the user. Passed through to the
/// completion function opaquely.
pub const MODELS: [&str; 9] = [
    "mixtral-8x7b",
    "snowflake-arctic",
    "mistral-large",
    "llama3-8b",
    "llama3-70b",
    "reka-flash",
    "mistral-7b",
    "llama2-70b-chat",
    "gemma-7b",
];

#[derive(Clone, Debug)]
pub struct Catalog {
    tables: Vec<String>,
    models: Vec<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            tables: TABLES.iter().map(|name| name.to_string()).collect(),
            models: MODELS.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.tables.iter().any(|table| table == name)
    }

    pub fn has_model(&self, name: &str) -> bool {
        self.models.iter().any(|model| model == name)
    }

    pub fn default_table(&self) -> &str {
        &self.tables[0]
    }

    pub fn default_model(&self) -> &str {
        "snowflake-arctic"
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

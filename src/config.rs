use serde::Deserialize;

/// Number of quotes sampled (with replacement) per round for frequency hints.
pub const QUOTE_SAMPLE_SIZE: usize = 50;

/// Maximum shuffle attempts before falling back to a rotation derangement.
pub const DERANGEMENT_MAX_ATTEMPTS: u32 = 64;

/// Lower bound for any letter's frequency hint percentage.
pub const MIN_FREQUENCY_HINT: u8 = 1;

/// Default port for the game API server.
pub const DEFAULT_PORT: u16 = 5000;

/// One hosted game variant: a name (used as the API path segment) and the
/// word list it draws plaintexts from.
#[derive(Debug, Clone, Deserialize)]
pub struct VariantConfig {
    pub name: String,
    pub words_file: String,
}

/// Top-level configuration for the game server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Port to bind; 0 lets the OS pick.
    pub port: u16,
    /// Quote corpus shared by all variants.
    pub quotes_file: String,
    /// Game variants to host.
    pub variants: Vec<VariantConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            quotes_file: "data/English_Quotes.csv".to_string(),
            variants: vec![
                VariantConfig {
                    name: "fifty".to_string(),
                    words_file: "data/MostCommonEnglishWords.txt".to_string(),
                },
                VariantConfig {
                    name: "twohundred".to_string(),
                    words_file: "data/EnglishWords.txt".to_string(),
                },
            ],
        }
    }
}

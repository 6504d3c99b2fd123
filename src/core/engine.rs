use crate::core::extract::extract_pkg_config_items;
use crate::core::FlagSource;
use crate::domain::model::{Extraction, ExtractionReport};
use crate::utils::error::{PkgFlagsError, Result};

pub struct ExtractionEngine<S: FlagSource> {
    source: S,
    prefixes: Vec<String>,
}

impl<S: FlagSource> ExtractionEngine<S> {
    pub fn new(source: S, prefixes: Vec<String>) -> Self {
        Self { source, prefixes }
    }

    pub async fn run(&self) -> Result<ExtractionReport> {
        if self.prefixes.is_empty() {
            return Err(PkgFlagsError::ValidationError {
                message: "no prefixes requested".to_string(),
            });
        }

        let flags = self.source.read_flags().await?;
        tracing::debug!("Read {} flags from source", flags.len());

        let extractions: Vec<Extraction> = self
            .prefixes
            .iter()
            .map(|prefix| {
                let values = extract_pkg_config_items(&flags, prefix);
                tracing::debug!("-{}: {} matching flags", prefix, values.len());
                Extraction {
                    prefix: prefix.clone(),
                    values,
                }
            })
            .collect();

        let matched: usize = extractions.iter().map(|e| e.values.len()).sum();
        tracing::info!(
            "Extracted {} values for {} prefixes from {} flags",
            matched,
            extractions.len(),
            flags.len()
        );

        Ok(ExtractionReport {
            flag_count: flags.len(),
            extractions,
        })
    }
}

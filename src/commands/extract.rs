use crate::config::{discover_config, load_config_from_path, SchemaConfig};
use crate::driver::{extract_batch, SchemaReport};
use crate::extraction::{HierarchyResolver, StructSchemaExtractor};
use crate::io::output::{create_writer, OutputFormat};
use crate::model::TypeName;
use crate::observability::{set_phase, ExtractionPhase};
use crate::policy::ManagedStructPolicy;
use crate::provider::{MethodSetProvider, TypeCatalog};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub catalog: PathBuf,
    pub types: Vec<String>,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
}

/// Build the default extractor for a provider and configuration.
pub fn build_extractor(provider: &dyn MethodSetProvider, config: &SchemaConfig) -> StructSchemaExtractor {
    StructSchemaExtractor::new(
        Arc::new(ManagedStructPolicy::new(config.types.clone())),
        Arc::new(HierarchyResolver::new(provider.hierarchy())),
        config.types.clone(),
    )
}

/// Run the extraction and write the reports. Returns `true` when every
/// report stays below the configured failure threshold.
pub fn handle_extract(options: ExtractConfig) -> Result<bool> {
    let (catalog, config) = {
        let _phase = set_phase(ExtractionPhase::Loading);
        let config = match &options.config {
            Some(path) => load_config_from_path(path)?,
            None => discover_config(
                options
                    .catalog
                    .parent()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(".")),
            ),
        };
        let catalog = TypeCatalog::load(&options.catalog)
            .with_context(|| format!("Failed to load catalog {}", options.catalog.display()))?;
        (catalog, config)
    };
    info!(types = catalog.len(), "loaded catalog");

    let extractor = build_extractor(&catalog, &config);
    let roots: Vec<TypeName> = options.types.iter().map(|t| TypeName::from(t.as_str())).collect();
    let reports: Vec<SchemaReport> = extract_batch(&catalog, &extractor, &roots)
        .into_iter()
        .collect::<Result<_, _>>()?;

    let _phase = set_phase(ExtractionPhase::OutputGeneration);
    let mut writer = create_writer(options.format, Box::new(std::io::stdout()));
    for report in &reports {
        writer.write_report(report)?;
    }

    let threshold = config.diagnostics.fail_on;
    Ok(reports.iter().all(|r| !r.fails(threshold)))
}

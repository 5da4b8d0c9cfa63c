//! Sample-data seeding and data-file loading for the CLI.
//!
//! The engine itself never owns data; callers hand it a `Registry`. This
//! module builds one, either from the built-in demo dataset or from a YAML
//! file with the same shape.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::matching::{
    DevelopmentTier, EntityProfile, EntityType, ProjectType, RegionalProfile, Registry,
};
use crate::metrics::RegionInput;

/// On-disk registry shape: regions carry the optional-field metric input so
/// data files can stay sparse, and the development tier is derived when
/// omitted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub regions: Vec<RegionRecord>,
    #[serde(default)]
    pub entities: Vec<EntityProfile>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegionRecord {
    pub region_id: String,
    pub name: String,
    #[serde(default)]
    pub metrics: RegionInput,
    #[serde(default)]
    pub unemployment_rate: Option<f64>,
    #[serde(default)]
    pub development_tier: Option<DevelopmentTier>,
    #[serde(default)]
    pub project_opportunities: Vec<ProjectType>,
    #[serde(default)]
    pub current_projects: Vec<String>,
}

impl RegionRecord {
    /// Normalize into a `RegionalProfile`, deriving the tier when the record
    /// doesn't declare one. Data-quality notes land in `notes`.
    pub fn into_profile(self, notes: &mut Vec<String>) -> RegionalProfile {
        let metrics = self.metrics.normalize(notes);
        let mut profile = RegionalProfile {
            region_id: self.region_id,
            name: self.name,
            metrics,
            unemployment_rate: self.unemployment_rate.unwrap_or(0.05).clamp(0.0, 1.0),
            development_tier: DevelopmentTier::Emerging,
            project_opportunities: self.project_opportunities,
            current_projects: self.current_projects,
        };
        profile.development_tier = self
            .development_tier
            .unwrap_or_else(|| DevelopmentTier::derive(&profile));
        profile
    }
}

/// Load a registry from a YAML data file.
pub fn load_registry(path: &Path, notes: &mut Vec<String>) -> Result<Registry> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file at {}", path.display()))?;
    let file: RegistryFile = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse data file: invalid YAML in {}", path.display()))?;

    let mut registry = Registry::new();
    for record in file.regions {
        registry.upsert_region(record.into_profile(notes));
    }
    for entity in file.entities {
        registry.upsert_entity(entity);
    }
    Ok(registry)
}

/// The built-in demo registry: three US metros and three entities.
pub fn sample_registry() -> Registry {
    let mut registry = Registry::new();
    let mut notes = Vec::new();

    let regions = [
        RegionRecord {
            region_id: "TX-AUS".to_string(),
            name: "Austin Metro".to_string(),
            metrics: RegionInput {
                city: Some("Austin".to_string()),
                country: Some("USA".to_string()),
                region: Some("Texas".to_string()),
                population: Some(2_500_000),
                gdp_per_capita: Some(75_000.0),
                infrastructure_score: Some(0.92),
                talent_availability: Some(0.88),
                cost_of_living: Some(0.75),
                tax_rate: Some(0.15),
                regulatory_ease: Some(0.78),
                market_access: Some(0.90),
                political_stability: Some(0.95),
                growth_rate: Some(0.085),
                inflation_rate: Some(0.03),
                currency_stability: Some(0.95),
                digital_infrastructure: Some(0.93),
                supply_chain_efficiency: Some(0.80),
                innovation_index: Some(0.90),
                sustainability_score: Some(0.72),
                geopolitical_risk: Some(0.15),
                market_volatility: Some(0.30),
            },
            unemployment_rate: Some(0.032),
            development_tier: Some(DevelopmentTier::Premium),
            project_opportunities: vec![
                ProjectType::Technology,
                ProjectType::SmartCity,
                ProjectType::Education,
            ],
            current_projects: vec![
                "Tech Hub Expansion".to_string(),
                "Smart Transportation".to_string(),
            ],
        },
        RegionRecord {
            region_id: "NC-RAL".to_string(),
            name: "Raleigh-Durham".to_string(),
            metrics: RegionInput {
                city: Some("Raleigh".to_string()),
                country: Some("USA".to_string()),
                region: Some("North Carolina".to_string()),
                population: Some(1_800_000),
                gdp_per_capita: Some(68_000.0),
                infrastructure_score: Some(0.85),
                talent_availability: Some(0.82),
                cost_of_living: Some(0.68),
                tax_rate: Some(0.20),
                regulatory_ease: Some(0.75),
                market_access: Some(0.85),
                political_stability: Some(0.90),
                growth_rate: Some(0.072),
                inflation_rate: Some(0.03),
                currency_stability: Some(0.95),
                digital_infrastructure: Some(0.86),
                supply_chain_efficiency: Some(0.74),
                innovation_index: Some(0.84),
                sustainability_score: Some(0.70),
                geopolitical_risk: Some(0.15),
                market_volatility: Some(0.32),
            },
            unemployment_rate: Some(0.038),
            development_tier: Some(DevelopmentTier::Established),
            project_opportunities: vec![
                ProjectType::Technology,
                ProjectType::Healthcare,
                ProjectType::Education,
            ],
            current_projects: vec!["Research Triangle Expansion".to_string()],
        },
        RegionRecord {
            region_id: "TN-NAS".to_string(),
            name: "Nashville Metro".to_string(),
            metrics: RegionInput {
                city: Some("Nashville".to_string()),
                country: Some("USA".to_string()),
                region: Some("Tennessee".to_string()),
                population: Some(2_100_000),
                gdp_per_capita: Some(62_000.0),
                infrastructure_score: Some(0.78),
                talent_availability: Some(0.75),
                cost_of_living: Some(0.65),
                tax_rate: Some(0.18),
                regulatory_ease: Some(0.85),
                market_access: Some(0.80),
                political_stability: Some(0.88),
                growth_rate: Some(0.068),
                inflation_rate: Some(0.035),
                currency_stability: Some(0.95),
                digital_infrastructure: Some(0.76),
                supply_chain_efficiency: Some(0.82),
                innovation_index: Some(0.68),
                sustainability_score: Some(0.64),
                geopolitical_risk: Some(0.18),
                market_volatility: Some(0.35),
            },
            unemployment_rate: Some(0.041),
            development_tier: Some(DevelopmentTier::Growing),
            project_opportunities: vec![
                ProjectType::Manufacturing,
                ProjectType::Logistics,
                ProjectType::Healthcare,
            ],
            current_projects: vec!["Music Industry Hub".to_string()],
        },
    ];

    for record in regions {
        registry.upsert_region(record.into_profile(&mut notes));
    }

    registry.upsert_entity(EntityProfile {
        entity_id: "GOV-TX".to_string(),
        name: "Texas Economic Development Corporation".to_string(),
        entity_type: EntityType::Government,
        capabilities: vec![
            "Tax Incentives".to_string(),
            "Infrastructure Development".to_string(),
            "Workforce Training".to_string(),
        ],
        investment_capacity: 500_000_000.0,
        preferred_regions: vec![
            "TX-AUS".to_string(),
            "TX-HOU".to_string(),
            "TX-DAL".to_string(),
        ],
        project_interests: vec![
            ProjectType::Technology,
            ProjectType::Manufacturing,
            ProjectType::Infrastructure,
        ],
    });
    registry.upsert_entity(EntityProfile {
        entity_id: "COMP-TECH".to_string(),
        name: "InnovateTech Solutions".to_string(),
        entity_type: EntityType::Company,
        capabilities: vec![
            "AI Development".to_string(),
            "Automation".to_string(),
            "Data Analytics".to_string(),
        ],
        investment_capacity: 25_000_000.0,
        preferred_regions: vec![
            "TX-AUS".to_string(),
            "NC-RAL".to_string(),
            "CA-SF".to_string(),
        ],
        project_interests: vec![
            ProjectType::Technology,
            ProjectType::SmartCity,
            ProjectType::Education,
        ],
    });
    registry.upsert_entity(EntityProfile {
        entity_id: "INV-GROWTH".to_string(),
        name: "Regional Growth Capital".to_string(),
        entity_type: EntityType::Investor,
        capabilities: vec![
            "Project Financing".to_string(),
            "Strategic Planning".to_string(),
            "Market Analysis".to_string(),
        ],
        investment_capacity: 100_000_000.0,
        preferred_regions: vec![
            "TN-NAS".to_string(),
            "NC-RAL".to_string(),
            "GA-ATL".to_string(),
        ],
        project_interests: vec![
            ProjectType::Infrastructure,
            ProjectType::RenewableEnergy,
            ProjectType::Logistics,
        ],
    });

    registry
}

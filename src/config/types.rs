//! Configuration types for settlement calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, along with the built-in
//! Colombian reference values used when no configuration directory is given.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the labor jurisdiction the tables belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionMetadata {
    /// The ISO country code (e.g., "CO").
    pub code: String,
    /// The human-readable name of the rule set.
    pub name: String,
    /// The version of the published reference values.
    pub version: String,
    /// URL to the official reference documentation.
    pub source_url: String,
}

/// Statutory reference values for a single calendar year.
///
/// # Example
///
/// ```
/// use settlement_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates {
///     year: 2025,
///     minimum_wage: Decimal::from(1_423_500),
///     transport_allowance: Decimal::from(200_000),
/// };
/// assert_eq!(rates.year, 2025);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// The calendar year these values apply to.
    pub year: i32,
    /// The statutory monthly minimum wage (SMMLV).
    pub minimum_wage: Decimal,
    /// The statutory monthly transport allowance.
    pub transport_allowance: Decimal,
}

/// The value severance interest is computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeveranceInterestBasis {
    /// The severance line as reported, which is zero when severance is
    /// excluded from the settlement.
    #[default]
    ReportedLine,
    /// The severance entitlement for the sub-period, computed whether or not
    /// the severance line itself is included in the settlement.
    Entitlement,
}

const DEFAULT_SEVERANCE_INTEREST_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);
const DEFAULT_YEAR_DAY_BASIS: Decimal = Decimal::from_parts(360, 0, 0, false, 0);
const DEFAULT_VACATION_DAY_BASIS: Decimal = Decimal::from_parts(720, 0, 0, false, 0);
const DEFAULT_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

fn default_severance_interest_rate() -> Decimal {
    DEFAULT_SEVERANCE_INTEREST_RATE
}

fn default_year_day_basis() -> Decimal {
    DEFAULT_YEAR_DAY_BASIS
}

fn default_vacation_day_basis() -> Decimal {
    DEFAULT_VACATION_DAY_BASIS
}

fn default_hours_per_day() -> Decimal {
    DEFAULT_HOURS_PER_DAY
}

/// Constants of the benefit accrual formulas.
///
/// Every field has a statutory default, so a `benefits.yaml` only needs to
/// list the values it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitRules {
    /// Annual severance interest rate (0.12).
    #[serde(default = "default_severance_interest_rate")]
    pub severance_interest_rate: Decimal,
    /// Commercial year length used by severance, interest and service bonus (360).
    #[serde(default = "default_year_day_basis")]
    pub year_day_basis: Decimal,
    /// Divisor used by vacation pay (720, i.e. 15 days per 360).
    #[serde(default = "default_vacation_day_basis")]
    pub vacation_day_basis: Decimal,
    /// Hours per day assumed when an hours-based input does not give one (8).
    #[serde(default = "default_hours_per_day")]
    pub default_hours_per_day: Decimal,
    /// What severance interest is computed against.
    #[serde(default)]
    pub severance_interest_basis: SeveranceInterestBasis,
}

impl Default for BenefitRules {
    fn default() -> Self {
        Self {
            severance_interest_rate: DEFAULT_SEVERANCE_INTEREST_RATE,
            year_day_basis: DEFAULT_YEAR_DAY_BASIS,
            vacation_day_basis: DEFAULT_VACATION_DAY_BASIS,
            default_hours_per_day: DEFAULT_HOURS_PER_DAY,
            severance_interest_basis: SeveranceInterestBasis::default(),
        }
    }
}

/// The outcome of looking a year up in a [`StatutoryTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLookup<'a> {
    /// The row that applies.
    pub rates: &'a StatutoryRates,
    /// True when the requested year had no row and the latest row was used.
    pub fallback: bool,
}

/// Year-indexed table of statutory reference values.
///
/// Years missing from the table resolve to the row with the highest year.
/// The table is never empty.
///
/// # Example
///
/// ```
/// use settlement_engine::config::StatutoryTable;
/// use rust_decimal::Decimal;
///
/// let table = StatutoryTable::colombia();
/// let lookup = table.lookup(2030);
/// assert!(lookup.fallback);
/// assert_eq!(lookup.rates.year, 2027);
/// assert_eq!(lookup.rates.minimum_wage, Decimal::from(1_850_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatutoryTable {
    rows: BTreeMap<i32, StatutoryRates>,
    latest: StatutoryRates,
}

impl StatutoryTable {
    /// Builds a table from its rows.
    ///
    /// Returns `InvalidStatutoryTable` if the rows are empty, a year appears
    /// twice, or any amount is negative or the minimum wage is not positive.
    pub fn new(rows: Vec<StatutoryRates>) -> EngineResult<Self> {
        let mut table: BTreeMap<i32, StatutoryRates> = BTreeMap::new();
        for row in rows {
            if row.minimum_wage <= Decimal::ZERO {
                return Err(EngineError::InvalidStatutoryTable {
                    message: format!("minimum wage for {} must be positive", row.year),
                });
            }
            if row.transport_allowance < Decimal::ZERO {
                return Err(EngineError::InvalidStatutoryTable {
                    message: format!("transport allowance for {} cannot be negative", row.year),
                });
            }
            let year = row.year;
            if table.insert(year, row).is_some() {
                return Err(EngineError::InvalidStatutoryTable {
                    message: format!("duplicate year {}", year),
                });
            }
        }

        let latest = table.values().next_back().cloned().ok_or_else(|| {
            EngineError::InvalidStatutoryTable {
                message: "at least one year is required".to_string(),
            }
        })?;

        Ok(Self {
            rows: table,
            latest,
        })
    }

    /// The built-in Colombian minimum wage and transport allowance table.
    pub fn colombia() -> Self {
        let rows = [
            (2024, 1_300_000, 162_000),
            (2025, 1_423_500, 200_000),
            (2026, 1_750_905, 249_095),
            (2027, 1_850_000, 280_000),
        ]
        .map(|(year, minimum_wage, transport_allowance)| StatutoryRates {
            year,
            minimum_wage: Decimal::from(minimum_wage),
            transport_allowance: Decimal::from(transport_allowance),
        });

        Self {
            latest: rows[rows.len() - 1].clone(),
            rows: rows.into_iter().map(|rates| (rates.year, rates)).collect(),
        }
    }

    /// Looks up the values for a year, falling back to the latest row.
    pub fn lookup(&self, year: i32) -> RateLookup<'_> {
        match self.rows.get(&year) {
            Some(rates) => RateLookup {
                rates,
                fallback: false,
            },
            None => RateLookup {
                rates: &self.latest,
                fallback: true,
            },
        }
    }

    /// Returns the row with the highest year.
    pub fn latest(&self) -> &StatutoryRates {
        &self.latest
    }

    /// Returns all rows in ascending year order.
    pub fn rows(&self) -> impl Iterator<Item = &StatutoryRates> {
        self.rows.values()
    }
}

impl Default for StatutoryTable {
    fn default() -> Self {
        Self::colombia()
    }
}

/// The complete statutory configuration.
///
/// Aggregates jurisdiction metadata, the year-indexed reference table and
/// the accrual formula constants.
#[derive(Debug, Clone)]
pub struct StatutoryConfig {
    metadata: JurisdictionMetadata,
    table: StatutoryTable,
    rules: BenefitRules,
}

impl StatutoryConfig {
    /// Creates a new StatutoryConfig from its component parts.
    pub fn new(metadata: JurisdictionMetadata, table: StatutoryTable, rules: BenefitRules) -> Self {
        Self {
            metadata,
            table,
            rules,
        }
    }

    /// The built-in Colombian configuration.
    pub fn colombia() -> Self {
        Self::new(
            JurisdictionMetadata {
                code: "CO".to_string(),
                name: "Colombia - prestaciones sociales".to_string(),
                version: "2027".to_string(),
                source_url: "https://www.mintrabajo.gov.co".to_string(),
            },
            StatutoryTable::colombia(),
            BenefitRules::default(),
        )
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the statutory reference table.
    pub fn table(&self) -> &StatutoryTable {
        &self.table
    }

    /// Returns the accrual formula constants.
    pub fn rules(&self) -> &BenefitRules {
        &self.rules
    }
}

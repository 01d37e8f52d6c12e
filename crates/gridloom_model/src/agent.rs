//! Investment agents.
//!
//! An agent decides which processes to invest in, per region, with separate
//! parameter sets for new and retrofit capacity. The enum spellings mirror
//! the external engine's vocabulary so serialized records round-trip.

use std::collections::BTreeMap;

use gridloom_foundation::Keyed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Objective an agent can optimise for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObjectiveKind {
    /// Comfort level.
    #[cfg_attr(feature = "serde", serde(rename = "comfort"))]
    Comfort,
    /// Conversion efficiency.
    #[cfg_attr(feature = "serde", serde(rename = "efficiency"))]
    Efficiency,
    /// Fixed costs.
    #[cfg_attr(feature = "serde", serde(rename = "fixed_costs"))]
    FixedCosts,
    /// Capital costs.
    #[cfg_attr(feature = "serde", serde(rename = "capital_costs"))]
    CapitalCosts,
    /// Fuel consumption cost.
    #[cfg_attr(feature = "serde", serde(rename = "fuel_consumption_cost"))]
    FuelConsumption,
    /// Emissions.
    #[cfg_attr(feature = "serde", serde(rename = "Emission"))]
    Emission,
    /// Levelised cost of energy.
    #[cfg_attr(feature = "serde", serde(rename = "LCOE"))]
    Lcoe,
    /// Net present value.
    #[cfg_attr(feature = "serde", serde(rename = "NPV"))]
    Npv,
    /// Equivalent annual cost.
    #[cfg_attr(feature = "serde", serde(rename = "EAC"))]
    Eac,
}

/// Search rule restricting which processes an agent considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchRule {
    /// Processes with the same end use.
    #[cfg_attr(feature = "serde", serde(rename = "same_enduse"))]
    SameEndUse,
    /// All processes.
    #[cfg_attr(feature = "serde", serde(rename = "all"))]
    All,
    /// Technologically similar processes.
    #[cfg_attr(feature = "serde", serde(rename = "similar_technology"))]
    Similar,
    /// Processes consuming the same fuel.
    #[cfg_attr(feature = "serde", serde(rename = "fueltype"))]
    FuelType,
    /// Only processes with existing capacity.
    #[cfg_attr(feature = "serde", serde(rename = "existing"))]
    Existing,
    /// Processes past the maturity threshold.
    #[cfg_attr(feature = "serde", serde(rename = "maturity"))]
    Maturity,
    /// Processes currently referenced by capacity.
    #[cfg_attr(feature = "serde", serde(rename = "currently_referenced_tech"))]
    NonZeroCapacity,
}

/// How an agent combines multiple objectives into a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecisionMethod {
    /// Arithmetic mean of objectives.
    #[cfg_attr(feature = "serde", serde(rename = "mean"))]
    Mean,
    /// Weighted sum of objectives.
    #[cfg_attr(feature = "serde", serde(rename = "weighted_sum"))]
    WeightedSum,
    /// Lexicographic ordering.
    #[cfg_attr(feature = "serde", serde(rename = "lexo"))]
    Lexical,
    /// Retrofit lexicographic ordering.
    #[cfg_attr(feature = "serde", serde(rename = "retro_lexo"))]
    RetroLexical,
    /// Epsilon-constraint method.
    #[cfg_attr(feature = "serde", serde(rename = "epsilon"))]
    Epsilon,
    /// Retrofit epsilon-constraint method.
    #[cfg_attr(feature = "serde", serde(rename = "retro_epsilon"))]
    RetroEpsilon,
    /// Single objective only.
    #[cfg_attr(feature = "serde", serde(rename = "singleObj"))]
    SingleObjective,
}

/// Whether agent data applies to new or retrofit capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AgentType {
    /// Investment in new capacity.
    New,
    /// Retrofit of existing capacity.
    Retrofit,
}

/// One weighted objective in an agent's decision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentObjective {
    /// What is being optimised.
    pub kind: ObjectiveKind,
    /// Weight or parameter attached to the objective.
    pub data: f64,
    /// Sort direction, where the decision method uses one.
    pub sort: Option<bool>,
}

impl AgentObjective {
    /// Creates an objective with no sort direction.
    #[must_use]
    pub fn new(kind: ObjectiveKind, data: f64) -> Self {
        Self {
            kind,
            data,
            sort: None,
        }
    }
}

/// Decision parameters for one agent in one region.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentData {
    /// Primary objective.
    pub objective_1: AgentObjective,
    /// Optional secondary objective.
    pub objective_2: Option<AgentObjective>,
    /// Optional tertiary objective.
    pub objective_3: Option<AgentObjective>,
    /// Search rule restricting the candidate set.
    pub search_rule: SearchRule,
    /// How objectives combine into a decision.
    pub decision_method: DecisionMethod,
    /// Investment budget; infinite when unconstrained.
    pub budget: f64,
    /// Name of the capacity-share column this agent owns.
    pub share: String,
    /// Fraction of demand this agent serves.
    pub quantity: f64,
    /// Maturity threshold for the `maturity` search rule.
    pub maturity_threshold: f64,
}

impl AgentData {
    /// Creates agent data with a single LCOE objective and permissive
    /// defaults (search all, single-objective decision, unbounded budget).
    #[must_use]
    pub fn new(share: impl Into<String>) -> Self {
        Self {
            objective_1: AgentObjective::new(ObjectiveKind::Lcoe, 1.0),
            objective_2: None,
            objective_3: None,
            search_rule: SearchRule::All,
            decision_method: DecisionMethod::SingleObjective,
            budget: f64::INFINITY,
            share: share.into(),
            quantity: 1.0,
            maturity_threshold: -1.0,
        }
    }
}

/// An investment agent.
///
/// `sectors` references the sector store; the keys of `new` and `retrofit`
/// reference the region store. Both are validated on create/update.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Agent {
    /// Unique agent name (the storage key).
    pub name: String,
    /// Sectors this agent operates in.
    pub sectors: Vec<String>,
    /// Per-region parameters for new-capacity decisions.
    pub new: BTreeMap<String, AgentData>,
    /// Per-region parameters for retrofit decisions.
    pub retrofit: BTreeMap<String, AgentData>,
}

impl Agent {
    /// Creates an agent with no sectors and no regional data.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sectors: Vec::new(),
            new: BTreeMap::new(),
            retrofit: BTreeMap::new(),
        }
    }

    /// Iterates every region name referenced by this agent's data maps,
    /// deduplicated.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        let mut names: Vec<&str> = self
            .new
            .keys()
            .chain(self.retrofit.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names.dedup();
        names.into_iter()
    }
}

impl Keyed for Agent {
    fn key(&self) -> String {
        self.name.clone()
    }
}

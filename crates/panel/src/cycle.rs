//! The per-interaction update cycle.
//!
//! One call per user interaction: reconcile the selection, filter and
//! rank, project the views. Pure function of (previous state, inputs);
//! the same cycle that changes the selection already filters with it.

use areas::{Dataset, FilterCriteria, GroupField};
use serde::{Deserialize, Serialize};

use crate::rank;
use crate::selection::{CycleSignals, SelectionSet, reconcile};
use crate::variant::DashboardVariant;
use crate::view;

/// Inputs of one update cycle, as sent by the UI runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub signals: CycleSignals,
    /// The session's selection before this cycle.
    #[serde(default)]
    pub selection: SelectionSet,
}

/// All render payloads of one cycle plus the new selection, produced
/// together, atomically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateResponse {
    pub bar: view::BarChart,
    pub map: view::Choropleth,
    pub pie_regions: view::PieChart,
    pub pie_areas: view::PieChart,
    pub table: view::TableView,
    pub selection: SelectionSet,
}

pub fn run_cycle(
    dataset: &Dataset,
    variant: &DashboardVariant,
    request: &UpdateRequest,
) -> UpdateResponse {
    let selection = reconcile(&request.selection, &request.signals);
    let candidates = rank::filter_candidates(
        dataset.areas(),
        &request.criteria,
        variant.secondary_filter,
        &selection,
    );
    let top = rank::top_by_threat(&candidates, rank::TOP_N);

    UpdateResponse {
        bar: view::bar_chart(&top, &selection, variant),
        map: view::choropleth(&top, dataset, variant),
        pie_regions: view::pie_chart(
            &top,
            GroupField::Uf,
            variant.pie_regions_category,
            variant.pie_regions_title,
        ),
        pie_areas: view::pie_chart(
            &top,
            GroupField::Name,
            variant.pie_areas_category,
            variant.pie_areas_title,
        ),
        table: view::table_view(&top, variant),
        selection,
    }
}

//! UI state machine and the renderer seam.
//!
//! The hosting surface never toggles individual widgets itself. The
//! controller feeds events through [`transition`], derives a full
//! [`RenderFrame`] from the resulting state, and hands that frame to the
//! injected [`ResultRenderer`]. Entering any state therefore hides the
//! artifacts of every other state by construction.

use shared::domain::CollegeRecord;
use tracing::debug;

/// Cell text substituted for an absent record field.
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";

/// Submit control label while no submission is in flight.
pub const SUBMIT_IDLE_LABEL: &str = "Predict Colleges";

/// Submit control label while a submission is in flight.
pub const SUBMIT_BUSY_LABEL: &str = "Predicting...";

/// Notice shown when the endpoint answered successfully with zero matches.
pub const NO_RESULTS_NOTICE: &str = "No colleges found matching your criteria.";

/// Column titles of the results table, in render order.
pub const RESULT_COLUMNS: [&str; 6] = [
    "Institute",
    "Program",
    "Degree",
    "Year",
    "Round",
    "Closing Rank",
];

/// Presentation state of the results region. Exactly one is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Empty,
    Success(Vec<CollegeRecord>),
}

/// Everything that can happen to the results region.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// User triggered the form; valid from any state (submits are re-entrant).
    Submitted,
    /// The submission failed, locally or remotely; the message is final.
    Failed(String),
    /// The endpoint answered with zero matches.
    ResolvedEmpty,
    /// The endpoint answered with at least one match.
    ResolvedMatches(Vec<CollegeRecord>),
}

/// Which surfaces of the results region are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surfaces {
    pub results_area: bool,
    pub loading: bool,
    pub error: bool,
    pub empty_notice: bool,
    pub table: bool,
}

/// Pure transition function: (current state, event) -> (next state, surfaces).
///
/// The next state depends only on the event, which is what makes repeated
/// submissions restart cleanly from `Loading` no matter what terminal
/// state preceded them.
pub fn transition(current: UiState, event: UiEvent) -> (UiState, Surfaces) {
    let next = match event {
        UiEvent::Submitted => UiState::Loading,
        UiEvent::Failed(message) => UiState::Error(message),
        UiEvent::ResolvedEmpty => UiState::Empty,
        UiEvent::ResolvedMatches(records) => UiState::Success(records),
    };
    debug!(from = state_name(&current), to = state_name(&next), "ui transition");
    let surfaces = surfaces(&next);
    (next, surfaces)
}

/// Visible-surface set for a state. Loading, error, empty notice, and table
/// are mutually exclusive; the results region itself stays revealed once
/// the first submission starts.
pub fn surfaces(state: &UiState) -> Surfaces {
    match state {
        UiState::Idle => Surfaces {
            results_area: false,
            loading: false,
            error: false,
            empty_notice: false,
            table: false,
        },
        UiState::Loading => Surfaces {
            results_area: true,
            loading: true,
            error: false,
            empty_notice: false,
            table: false,
        },
        UiState::Error(_) => Surfaces {
            results_area: true,
            loading: false,
            error: true,
            empty_notice: false,
            table: false,
        },
        UiState::Empty => Surfaces {
            results_area: true,
            loading: false,
            error: false,
            empty_notice: true,
            table: false,
        },
        UiState::Success(_) => Surfaces {
            results_area: true,
            loading: false,
            error: false,
            empty_notice: false,
            table: true,
        },
    }
}

fn state_name(state: &UiState) -> &'static str {
    match state {
        UiState::Idle => "idle",
        UiState::Loading => "loading",
        UiState::Error(_) => "error",
        UiState::Empty => "empty",
        UiState::Success(_) => "success",
    }
}

/// One rendered table row: one cell per recognized record field.
pub type TableRow = [String; 6];

/// Cells for one record, placeholder-substituted, in column order.
pub fn row_cells(record: &CollegeRecord) -> TableRow {
    [
        text_cell(record.institute_short.as_deref()),
        text_cell(record.program_name.as_deref()),
        text_cell(record.degree_short.as_deref()),
        number_cell(record.year),
        number_cell(record.round_no),
        number_cell(record.closing_rank),
    ]
}

fn text_cell(value: Option<&str>) -> String {
    value.unwrap_or(MISSING_FIELD_PLACEHOLDER).to_string()
}

fn number_cell(value: Option<i64>) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| MISSING_FIELD_PLACEHOLDER.to_string())
}

/// Complete description of what the results region should show right now.
///
/// Rows are already placeholder-substituted; a renderer only lays them out.
/// An empty `rows` while `surfaces.table` is false doubles as "clear any
/// previously rendered rows".
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub surfaces: Surfaces,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub error_message: Option<String>,
    pub rows: Vec<TableRow>,
}

impl RenderFrame {
    /// Derives the frame for a state. Deterministic: equal states produce
    /// equal frames.
    pub fn for_state(state: &UiState) -> Self {
        let busy = matches!(state, UiState::Loading);
        Self {
            surfaces: surfaces(state),
            submit_enabled: !busy,
            submit_label: if busy {
                SUBMIT_BUSY_LABEL
            } else {
                SUBMIT_IDLE_LABEL
            },
            error_message: match state {
                UiState::Error(message) => Some(message.clone()),
                _ => None,
            },
            rows: match state {
                UiState::Success(records) => records.iter().map(row_cells).collect(),
                _ => Vec::new(),
            },
        }
    }
}

/// Passive collaborator owned by the hosting surface: the display.
pub trait ResultRenderer {
    fn render(&mut self, frame: &RenderFrame);
}

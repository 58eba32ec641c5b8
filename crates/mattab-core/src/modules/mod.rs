pub mod loader;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod schema;
pub mod serialization;
pub mod table;

pub use loader::{LoadedInputs, load_inputs};
pub use normalize::{NormalizedEntry, normalize, normalize_cell};
pub use pipeline::{RunReport, render_human_summary, run_pipeline};
pub use render::{ArtifactWriter, OutputArtifact, RenderError, RenderOutcome, render_all};
pub use schema::ParameterIndex;
pub use table::{ResultTable, ResultTables};

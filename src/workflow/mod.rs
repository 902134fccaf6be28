pub mod aggregate;
pub mod node;
pub mod router;
pub mod tone;

pub use aggregate::{BranchOutputs, coalesce};
pub use node::{PromptEvent, PromptNode, PromptRun};
pub use router::{Tone, route};
pub use tone::{ToneWorkflow, WorkflowRun, message_inputs};

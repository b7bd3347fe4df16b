// Hand-authored static content. Nothing here is computed or fetched.

pub mod analysis;
pub mod demo;
pub mod ecosystem;
pub mod organizations;
pub mod prompts;
pub mod solutions;

pub use analysis::{analysis_for, AiAnalysis, CRITICAL_QUESTIONS, TROPHIC_CASCADE};
pub use ecosystem::{edge_style, habitat_gradient, EdgeStyle, HELPER_PROMPTS};
pub use organizations::{LOCAL_ORGANIZATIONS, USER_ACTION_STATS};
pub use prompts::PromptTechnique;
pub use solutions::{solutions_for, CaseKeyword};

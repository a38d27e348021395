//! Skill tools: catalog listing, guide lookup and the assembled guides.

pub mod algorithmic_art;
pub mod canvas_design;
pub mod guide;
pub mod list;

pub use algorithmic_art::AlgorithmicArtGuideTool;
pub use canvas_design::CanvasDesignGuideTool;
pub use guide::GetSkillGuideTool;
pub use list::ListSkillsTool;

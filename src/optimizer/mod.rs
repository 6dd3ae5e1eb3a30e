pub mod planner;
pub mod report;
pub mod rewriter;

use tracing::debug;

use crate::config::OptimizerConfig;
use crate::error::OptimizeResult;
use crate::phrases::HookSelector;
use crate::request::{OptimizationJob, OptimizeRequest};

pub use planner::{
    planner_keyword_density, ChangeKind, EngagementPoint, OptimizationChange, OptimizationPlanner,
    OptimizationResult,
};
pub use report::{
    EngagementCategory, EngagementSuggestion, Improvements, KeywordInsertion, Report,
    ReportAssembler, ReportWarning, StructureKind, StructureRecommendation, WarningKind,
};
pub use rewriter::{inject_opening_keyword, inject_question, ScriptRewriter};

pub struct Optimizer {
    planner: OptimizationPlanner,
    rewriter: ScriptRewriter,
    assembler: ReportAssembler,
}

impl Optimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self {
            planner: OptimizationPlanner::new(config.planner),
            rewriter: ScriptRewriter::new(config.rewriter),
            assembler: ReportAssembler::new(config.metrics, config.report),
        }
    }

    pub fn with_selector(mut self, selector: impl HookSelector + 'static) -> Self {
        self.rewriter = self.rewriter.with_selector(selector);
        self
    }

    pub fn optimize(&self, request: OptimizeRequest) -> OptimizeResult<Report> {
        let job = request.into_job()?;
        Ok(self.run(&job))
    }

    pub fn run(&self, job: &OptimizationJob) -> Report {
        let keywords = job.keywords.flattened();
        let plan = self.planner.plan(
            &job.script,
            &keywords,
            &job.content_style,
            job.optimization_level,
        );
        debug!(
            changes = plan.changes.len(),
            engagement_points = plan.engagement_points.len(),
            "optimizations planned"
        );

        let optimized = self.rewriter.rewrite(
            &job.script,
            &plan,
            job.keywords.primary_keyword(),
            &job.content_style,
        );
        self.assembler.assemble(job, plan, optimized)
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new(OptimizerConfig::default())
    }
}

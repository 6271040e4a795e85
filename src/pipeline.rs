//! User actions: normalize → build → call → render.
//!
//! Each action owns one [`Region`]. Starting an action supersedes any
//! in-flight action on the same region: the older one still completes its
//! call but drops its result instead of overwriting newer content.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, warn};

use crate::client::{ApiOutcome, HealthApi};
use crate::error::ValidationError;
use crate::input::{parse_food_query, LifestyleForm};
use crate::render::{
    render_demo_results, render_error, render_food_results, render_lifestyle_results,
    render_loading, Region, RenderTarget,
};
use crate::request::{AnalyzeFoodsRequest, LifestyleRequest};

/// What happened to the region once the call completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Result rendered into the region.
    Rendered,
    /// Error placeholder rendered into the region.
    Failed(String),
    /// A newer action on the region started first; nothing was rendered.
    Superseded,
}

pub struct Frontend<A, T> {
    api: A,
    target: T,
    generations: [AtomicU64; 3],
}

impl<A: HealthApi, T: RenderTarget> Frontend<A, T> {
    pub fn new(api: A, target: T) -> Self {
        Self {
            api,
            target,
            generations: Default::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Analyze a comma-separated food list.
    pub async fn analyze_foods(&self, raw: &str) -> Result<ActionOutcome, ValidationError> {
        let foods = parse_food_query(raw)?;
        let request = AnalyzeFoodsRequest::new(foods);

        let ticket = self.begin(Region::FoodResults, "Analyzing your foods...");
        let outcome = self.api.analyze_foods(&request).await;
        Ok(self.finish(Region::FoodResults, ticket, outcome, |analysis| {
            render_food_results(&analysis.results)
        }))
    }

    /// Assess lifestyle disease risk from the profile form.
    pub async fn assess_lifestyle(
        &self,
        form: &LifestyleForm,
    ) -> Result<ActionOutcome, ValidationError> {
        let (profile, diets) = form.normalize()?;
        let request = LifestyleRequest::new(&profile, &diets);
        debug!(
            days = diets.len(),
            foods = request.daily_foods.len(),
            "built lifestyle request"
        );

        let ticket = self.begin(Region::LifestyleResults, "Assessing your health risks...");
        let outcome = self.api.lifestyle_assessment(&request).await;
        Ok(self.finish(Region::LifestyleResults, ticket, outcome, |assessment| {
            render_lifestyle_results(&assessment)
        }))
    }

    /// Run a named server-side demo.
    pub async fn run_demo(&self, demo_type: &str) -> Result<ActionOutcome, ValidationError> {
        let demo_type = demo_type.trim();
        if demo_type.is_empty() {
            return Err(ValidationError::EmptyDemoType);
        }

        let ticket = self.begin(Region::DemoResults, &format!("Running {demo_type} demo..."));
        let outcome = self.api.run_demo(demo_type).await;
        Ok(self.finish(Region::DemoResults, ticket, outcome, |run| {
            render_demo_results(&run)
        }))
    }

    /// Load-time liveness probe. Never renders.
    pub async fn check_connection(&self) -> bool {
        self.api.health_check().await
    }

    fn begin(&self, region: Region, loading: &str) -> u64 {
        let ticket = self.generations[region.index()].fetch_add(1, Ordering::SeqCst) + 1;
        info!(region = region.id(), ticket, "action started");
        self.target.replace(region, render_loading(loading));
        ticket
    }

    fn finish<P>(
        &self,
        region: Region,
        ticket: u64,
        outcome: ApiOutcome<P>,
        render: impl FnOnce(P) -> String,
    ) -> ActionOutcome {
        if self.generations[region.index()].load(Ordering::SeqCst) != ticket {
            debug!(region = region.id(), ticket, "dropping superseded result");
            return ActionOutcome::Superseded;
        }

        match outcome {
            ApiOutcome::Success(payload) => {
                self.target.replace(region, render(payload));
                ActionOutcome::Rendered
            }
            ApiOutcome::Failure(message) => {
                warn!(region = region.id(), error = %message, "action failed");
                self.target.replace(region, render_error(&message));
                ActionOutcome::Failed(message)
            }
        }
    }
}

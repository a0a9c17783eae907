//! Gomory Cut Function Demo
//!
//! The single-breakpoint piecewise linear function on [0, 1] that rises
//! from (0, 0) to (f, 1) and falls back to (1, 0) is the smallest member
//! of the cut-generating function zoo: extreme for every f in (0, 1),
//! undefined otherwise.
//!
//! This demo builds it through the construction factory, shows a dry
//! run, serializes the attached record, and replays it by name through
//! a registry.

use parafam::prelude::*;
use parafam::Result;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// The classic one-parameter cut function.
#[derive(Debug, Clone, PartialEq)]
pub struct GomoryFunction {
    /// Breakpoint abscissa.
    pub f: f64,
    /// Slope on [0, f].
    pub rising_slope: f64,
    /// Slope on [f, 1].
    pub falling_slope: f64,
}

impl GomoryFunction {
    /// Evaluates the function at `x` in [0, 1].
    pub fn value_at(&self, x: f64) -> f64 {
        if x <= self.f {
            self.rising_slope * x
        } else {
            1.0 + self.falling_slope * (x - self.f)
        }
    }
}

impl ParametricFamily for GomoryFunction {
    const NAME: &'static str = "gomory";

    fn classify(params: &Params) -> Option<Classification> {
        let f = params.float_option("f").unwrap_or(0.5);
        if f > 0.0 && f < 1.0 {
            Some(Classification::Extreme)
        } else {
            Some(Classification::NotConstructible)
        }
    }

    fn construct(params: &Params) -> Result<Self> {
        let f = params.float_option("f").unwrap_or(0.5);
        Ok(Self {
            f,
            rising_slope: 1.0 / f,
            falling_slope: 1.0 / (f - 1.0),
        })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init();
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let factory = Factory::new();

    // Build a member; the classification diagnostic goes to tracing.
    let params = Params::new().with_option("f", 0.35);
    let instance = match factory.construct::<GomoryFunction>(params)? {
        Outcome::Constructed(instance) => instance,
        other => {
            println!("unexpected outcome: {other:?}");
            return Ok(());
        }
    };

    println!("pi(0)    = {}", instance.value_at(0.0));
    println!("pi(f)    = {}", instance.value_at(instance.f));
    println!("pi(0.75) = {}", instance.value_at(0.75));

    // The record is what a persistence layer saves, not the slopes.
    let json = serde_json::to_string_pretty(instance.record())?;
    println!("record:\n{json}");

    // Dry run: inspect the normalized call without building anything.
    let params = Params::new()
        .with_option("f", 0.6)
        .with_option("compute_args_only", true);
    if let Outcome::ArgsOnly(record) = factory.construct::<GomoryFunction>(params)? {
        println!("dry run would construct: {}({:?})", record.family(), record.options());
    }

    // Replay by name, the way a loader without the concrete type does.
    let mut registry = FamilyRegistry::new();
    registry.register::<GomoryFunction>();
    let replayed = registry
        .replay(instance.record())?
        .into_instance()
        .and_then(|dyn_instance| dyn_instance.downcast::<GomoryFunction>().ok());
    match replayed {
        Some(replayed) => println!("replayed pi(f) = {}", replayed.value_at(replayed.f)),
        None => println!("replay did not produce a gomory function"),
    }

    // Bad parameters are rejected before any object exists.
    let params = Params::new().with_option("f", 1.2);
    match factory.construct::<GomoryFunction>(params) {
        Err(err) => println!("f = 1.2 rejected: {err}"),
        Ok(_) => println!("f = 1.2 unexpectedly accepted"),
    }

    Ok(())
}

// SEO core: deterministic article metrics and headline keyword integration.
// Pure functions only. No I/O and no logging; callers own all side effects.

pub mod headline;
pub mod metrics;

// Application layer: concrete pipelines wiring adapters to the core.

pub mod pipelines;

pub mod step_sink;

pub mod step_event;

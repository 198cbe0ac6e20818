//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is a form that turns field values into an opaque payload and
//! hands it to one API call; `payload_form` owns that shared surface.

pub mod payload_form;

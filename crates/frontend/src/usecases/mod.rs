//! One module per console tab.

pub mod analysis_tools;
pub mod system_config;
pub mod translation;
pub mod weblog_analysis;

use crate::controller::Controller;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Callback that hands a controller handle to `task` and runs the returned
/// future on the local executor.
pub fn controller_action<F, Fut>(task: F) -> Callback<()>
where
    F: Fn(Controller) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let ctrl = use_context::<Controller>().expect("Controller context not found");
    Callback::new(move |_| spawn_local(task(ctrl.clone())))
}

use weave_api::{Diagnostic, LoaderContext, WarningHandler};

/// Deliver compiler warnings in order, through `handler` when one is set.
pub(crate) fn route(
    ctx: &dyn LoaderContext,
    handler: Option<&dyn WarningHandler>,
    warnings: &[Diagnostic],
) {
    let emit = |warning: &Diagnostic| ctx.emit_warning(warning);
    for warning in warnings {
        match handler {
            Some(handler) => handler.handle(warning, &emit),
            None => emit(warning),
        }
    }
}

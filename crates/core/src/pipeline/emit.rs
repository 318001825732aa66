use crate::allocator::posixify;
use crate::error::Result;
use crate::state::SharedState;
use weave_api::Output;

/// `<resource>.<index>.css`
pub fn virtual_artifact_path(resource: &str, index: u64) -> String {
    format!("{resource}.{index}.css")
}

/// Import that makes the host re-enter the loader for `css_path`.
pub fn import_statement(css_path: &str, loader_request: &str, resource: &str) -> String {
    format!("\nimport '{css_path}!=!{loader_request}?cssPath={css_path}!{resource}'\n;")
}

/// Stash the extracted styles and make `js_code` import them.
///
/// Returns the synthetic path the styles were stored under.
pub(crate) fn emit_virtual_artifact(
    state: &SharedState,
    loader_request: &str,
    filename: &str,
    js_code: &mut String,
    css: Output,
) -> Result<String> {
    let map_url = css.map.to_url()?;
    let resource = posixify(filename);
    let index = state.allocator.next(&resource);
    let css_path = virtual_artifact_path(&resource, index);

    let payload = format!("{}\n/*# sourceMappingURL={}*/", css.code, map_url);
    state.registry.store(css_path.clone(), payload)?;
    tracing::debug!("stored virtual artifact {}", css_path);

    js_code.push_str(&import_statement(&css_path, loader_request, &resource));
    Ok(css_path)
}

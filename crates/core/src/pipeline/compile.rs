use crate::error::{LoaderError, Result};
use serde_json::Value;
use weave_api::{CompileOptions, Compiled, Compiler, LoaderOptions, Processed};

pub const DEFAULT_FORMAT: &str = "esm";

/// Build the compiler configuration for one resource.
///
/// Styles are inlined by the compiler unless the loader extracts them. The
/// user's compiler options override that default, and the module format
/// always ends up set.
pub fn compile_options(filename: &str, options: &LoaderOptions) -> CompileOptions {
    let user = &options.compiler_options;
    CompileOptions {
        filename: filename.to_string(),
        css: user
            .css
            .clone()
            .unwrap_or(Value::Bool(!options.emit_css)),
        format: user
            .format
            .clone()
            .unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
        generate: user.generate.clone(),
        sourcemap: None,
        extra: user.extra.clone(),
    }
}

pub(crate) fn run(
    compiler: &dyn Compiler,
    processed: Processed,
    source: &str,
    options: &mut CompileOptions,
) -> Result<Compiled> {
    if let Some(map) = processed.map {
        options.sourcemap = Some(map);
    }

    let mut compiled = compiler
        .compile(&processed.code, options)
        .map_err(|err| LoaderError::compile(&err))?;

    if !compiled.js.map.has_sources_content() {
        compiled.js.map.embed_source(&options.filename, source);
    }

    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use weave_api::CompilerOptions;

    #[test]
    fn test_defaults_follow_emit_css() {
        let options = LoaderOptions {
            emit_css: true,
            ..LoaderOptions::default()
        };
        let compile = compile_options("src/App.txt", &options);
        assert_eq!(compile.filename, "src/App.txt");
        assert_eq!(compile.css, json!(false));
        assert_eq!(compile.format, "esm");
        assert!(compile.sourcemap.is_none());

        let compile = compile_options("src/App.txt", &LoaderOptions::default());
        assert_eq!(compile.css, json!(true));
    }

    #[test]
    fn test_user_options_are_merged() {
        let mut extra = serde_json::Map::new();
        extra.insert("dev".into(), json!(true));
        let options = LoaderOptions {
            emit_css: true,
            compiler_options: CompilerOptions {
                generate: Some(json!("ssr")),
                format: Some("cjs".into()),
                css: Some(json!("external")),
                extra,
            },
            ..LoaderOptions::default()
        };

        let compile = compile_options("src/App.txt", &options);
        assert_eq!(compile.css, json!("external"));
        assert_eq!(compile.format, "cjs");
        assert_eq!(compile.generate, Some(json!("ssr")));
        assert_eq!(compile.extra["dev"], json!(true));
    }
}

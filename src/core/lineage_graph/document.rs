use crate::core::error::LineageError;
use std::io::Write;
use std::path::PathBuf;
use url::Url;

/// Wrap a Mermaid diagram in a standalone page that renders it client-side.
pub fn html_document(diagram: &str, script_url: &str) -> String {
    format!(
        r#"<html>
<head>
    <title>Mermaid Diagram</title>
    <script src="{script}"></script>
    <style>
        .mermaid {{
          margin: auto;
        }}
    </style>
</head>
<body>
    <div class="mermaid">
{diagram}
    </div>

    <script>
        mermaid.initialize({{startOnLoad:true}});
    </script>
</body>
</html>
"#,
        script = escape_html(script_url),
        diagram = escape_html(diagram),
    )
}

/// Mermaid reads the div's text content, so entities are decoded back before
/// parsing.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Write the document to a temporary `.html` file that outlives the process
/// and optionally open it in the default viewer. Failing to launch a viewer
/// is not an error; the path is returned either way.
pub fn publish_html(document: &str, auto_open: bool) -> Result<PathBuf, LineageError> {
    let mut file = tempfile::Builder::new()
        .prefix("lineage-")
        .suffix(".html")
        .tempfile()
        .map_err(|e| LineageError::io(std::env::temp_dir(), e))?;
    file.write_all(document.as_bytes())
        .map_err(|e| LineageError::io(file.path(), e))?;

    let (_, path) = file.keep().map_err(|e| {
        let path = e.file.path().to_path_buf();
        LineageError::io(path, e.error)
    })?;
    tracing::info!(path = %path.display(), "lineage diagram written");

    if auto_open {
        open_in_viewer(&path);
    }
    Ok(path)
}

fn open_in_viewer(path: &std::path::Path) {
    let Ok(url) = Url::from_file_path(path) else {
        tracing::warn!(path = %path.display(), "cannot build file URL for diagram");
        return;
    };
    if let Err(err) = open::that(url.as_str()) {
        tracing::warn!(url = %url, "failed to open diagram: {}", err);
    }
}

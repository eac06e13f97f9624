/// Compose the stand-alone page used for live preview and export of a pen
///
/// The stylesheet goes in `<head>`, the markup in `<body>` and the script
/// after the markup so it runs once the elements exist.
pub fn compose_page(html: &str, css: &str, js: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <style>{css}</style>\n  </head>\n  <body>\n    {html}\n    <script>{js}</script>\n  </body>\n</html>\n"
    )
}

//! Global CSS styles for the desktop window.
//!
//! Reset and page-level rules only; the overlay brings its own stylesheet.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;
  --void-black: #000000;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

html, body, #main {
  width: 100%;
  height: 100%;
}

body {
  font-family: var(--font-sans);
  background: var(--void-black);
  color: #ffffff;
  overflow: hidden;
}

/* === App Shell === */
.app-shell {
  width: 100%;
  height: 100vh;
}
"#;

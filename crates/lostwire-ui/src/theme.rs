//! Static CSS for the overlay.
//!
//! Layout and colors only. Anything that moves is written per frame as an
//! inline style by the components.

pub const OVERLAY_STYLES: &str = r#"
/* === Connection Lost Overlay === */
.connection-lost {
  position: relative;
  width: 100%;
  height: 100%;
  background: #000000;
  overflow: hidden;
  font-family: var(--font-sans, 'Inter', 'Helvetica Neue', Arial, sans-serif);
}

/* === Background === */
.background-layer {
  position: absolute;
  inset: 0;
  opacity: 0.2;
}

.bg-gradient {
  position: absolute;
  inset: 0;
}

.bg-particles {
  position: absolute;
  inset: 0;
  opacity: 0.3;
  mix-blend-mode: overlay;
}

.bg-particle {
  position: absolute;
  border-radius: 9999px;
  background: #ffffff;
}

.bg-lines {
  position: absolute;
  inset: 0;
}

.bg-scan-line {
  position: absolute;
  left: 0;
  right: 0;
  height: 1px;
  background: rgba(239, 68, 68, 0.2);
}

/* === Glitch === */
.glitch-flash {
  position: absolute;
  inset: 0;
  background: #dc2626;
  mix-blend-mode: overlay;
}

.glitch-line {
  position: absolute;
  left: 0;
  right: 0;
  height: 1px;
  background: rgba(255, 255, 255, 0.3);
}

/* === Foreground === */
.overlay-content {
  position: relative;
  z-index: 10;
  width: 100%;
  height: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: space-between;
  padding: 3rem 0;
}

.content-group {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.brand-label {
  font-size: 4.5rem;
  font-weight: 700;
  letter-spacing: 0.05em;
  color: #ef4444;
}

.avatar-frame {
  border-radius: 0.75rem;
}

.avatar-card {
  background: rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(4px);
  border: 2px solid rgba(239, 68, 68, 0.4);
  border-radius: 0.75rem;
  padding: 0.5rem;
}

.avatar-image {
  display: block;
  width: 8rem;
  height: 8rem;
  border-radius: 0.75rem;
  object-fit: cover;
}

@media (min-width: 768px) {
  .avatar-image {
    width: 10rem;
    height: 10rem;
  }
}

.status-group {
  gap: 1.5rem;
}

.alert-glyph {
  color: #ef4444;
  margin-bottom: 1rem;
}

.status-headline {
  font-size: 2.25rem;
  font-weight: 700;
  letter-spacing: -0.025em;
  color: #ffffff;
}

.status-detail {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  color: #9ca3af;
}

.status-detail-text {
  font-size: 1.125rem;
}

.spinner {
  width: 20px;
  height: 20px;
  border: 2px solid rgba(239, 68, 68, 0.25);
  border-top-color: #ef4444;
  border-radius: 50%;
}
"#;

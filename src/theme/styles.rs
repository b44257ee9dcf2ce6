//! Global CSS styles for the APAC page.
//!
//! Palette variables come from `colors::root_variables`.

pub const GLOBAL_STYLES: &str = r#"
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

body {
  font-family: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  color: var(--text-body);
  line-height: 1.6;
}

button {
  font: inherit;
  cursor: pointer;
  border: none;
  background: none;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Layout === */
.page {
  min-height: 100vh;
  background: linear-gradient(135deg, var(--surface-slate), var(--brand-tint));
}

.container {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.page-section {
  padding: 5rem 0;
}

.section-white {
  background: var(--surface);
}

.section-slate {
  background: linear-gradient(135deg, var(--surface-slate), var(--brand-tint));
}

.gradient-text {
  background: linear-gradient(90deg, var(--brand-blue), var(--brand-purple));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.gradient-fill {
  background: linear-gradient(135deg, var(--brand-blue), var(--brand-purple));
}

/* === Icons === */
.icon { flex-shrink: 0; }
.icon-sm { width: 1.5rem; height: 1.5rem; }
.icon-md { width: 2rem; height: 2rem; }
.icon-lg { width: 4rem; height: 4rem; }

/* === Navigation === */
.nav-bar {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  background: rgba(255, 255, 255, 0.95);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.nav-inner {
  display: flex;
  justify-content: space-between;
  align-items: center;
  height: 4rem;
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  animation: slide-in 0.5s ease-out;
}

.brand-mark {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  color: white;
}

.brand-name {
  font-size: 1.25rem;
  font-weight: 700;
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-link,
.mobile-nav-link {
  padding: 0.5rem 0.75rem;
  border-radius: 0.375rem;
  font-weight: 500;
  color: var(--text-body);
  transition: all 200ms ease;
}

.nav-link { font-size: 0.875rem; }

.nav-link:hover,
.mobile-nav-link:hover {
  color: var(--brand-blue);
  background: var(--surface-slate);
}

.nav-link.active,
.mobile-nav-link.active {
  color: var(--brand-blue);
  background: var(--brand-tint);
}

.menu-toggle { display: none; }

.mobile-menu {
  display: none;
  background: var(--surface);
  border-top: 1px solid var(--border);
  padding: 0.5rem 1rem;
  animation: unfold 200ms ease-out;
}

.mobile-nav-link {
  display: block;
  width: 100%;
  text-align: left;
  font-size: 1rem;
}

.menu-backdrop {
  display: none;
  position: fixed;
  inset: 4rem 0 0 0;
  z-index: 40;
  background: rgba(15, 23, 42, 0.2);
}

@media (max-width: 767px) {
  .nav-links { display: none; }
  .menu-toggle { display: inline-flex; }
  .mobile-menu { display: block; }
  .menu-backdrop { display: block; }
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border-radius: 0.375rem;
  font-weight: 500;
  transition: all 200ms ease;
}

.btn-sm { padding: 0.5rem; font-size: 0.875rem; }
.btn-md { padding: 0.5rem 1rem; }
.btn-lg { padding: 0.75rem 2rem; font-size: 1.125rem; }

.btn-gradient {
  color: white;
  background: linear-gradient(90deg, var(--brand-blue), var(--brand-purple));
}

.btn-gradient:hover {
  background: linear-gradient(90deg, var(--brand-blue-dark), var(--brand-purple-dark));
}

.btn-outline {
  color: var(--brand-blue);
  border: 1px solid var(--brand-blue);
}

.btn-outline:hover { background: var(--brand-tint); }

.btn-ghost:hover { background: var(--surface-slate); }

/* === Cards and badges === */
.card {
  background: var(--surface);
  border-radius: 0.75rem;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  overflow: hidden;
}

.card-header {
  text-align: center;
  padding: 1.5rem 1.5rem 1rem;
}

.card-title {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--text-strong);
}

.card-description { color: var(--text-muted); }

.card-content { padding: 0 1.5rem 1.5rem; }

.badge {
  display: inline-block;
  margin-bottom: 1rem;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  font-size: 0.75rem;
  font-weight: 600;
  color: white;
  background: linear-gradient(90deg, var(--brand-blue), var(--brand-purple));
}

/* === Section headers === */
.section-header {
  text-align: center;
  margin-bottom: 4rem;
  animation: rise 0.8s ease-out;
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  color: var(--text-strong);
  margin-bottom: 1rem;
}

.section-divider {
  width: 6rem;
  height: 0.25rem;
  margin: 0 auto 2rem;
}

.section-lead {
  font-size: 1.125rem;
  color: var(--text-muted);
  max-width: 48rem;
  margin: 0 auto;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding-top: 4rem;
}

.hero-grid,
.two-col {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 3rem;
  align-items: center;
}

.hero-copy { animation: rise 0.8s ease-out; }

.hero-title {
  font-size: 3.75rem;
  font-weight: 700;
  line-height: 1.15;
  color: var(--text-strong);
  margin-bottom: 1.5rem;
}

.hero-subtitle {
  font-size: 1.875rem;
  font-weight: 400;
  color: var(--text-body);
  margin-bottom: 1.5rem;
}

.hero-lead {
  font-size: 1.125rem;
  color: var(--text-muted);
  margin-bottom: 2rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

.hero-media {
  position: relative;
  animation: zoom-in 0.8s ease-out 0.2s both;
}

.hero-photo {
  aspect-ratio: 4 / 3;
  border-radius: 1rem;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.hero-achievement {
  position: absolute;
  right: -1.5rem;
  bottom: -1.5rem;
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1.5rem;
  border-radius: 1rem;
  background: var(--surface);
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.hero-achievement .icon { color: var(--gold); }

.scroll-hint {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  color: var(--text-faint);
  animation: bob 2s ease-in-out infinite;
}

/* === About === */
.about-card { padding: 2rem; }

.card-heading {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-strong);
}

.card-heading.mission .icon { color: var(--brand-blue); }
.card-heading.community .icon { color: var(--green); }

.about-card p + p { margin-top: 1.5rem; }

/* === Projects === */
.three-col {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 2rem;
}

.project-card {
  height: 100%;
  transition: transform 300ms ease, box-shadow 300ms ease;
}

.project-card:hover { transform: translateY(-0.5rem); }

.project-stripe { height: 0.5rem; }

.project-icon {
  width: 4rem;
  height: 4rem;
  margin: 0 auto 1rem;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  color: white;
  transition: transform 300ms ease;
}

.project-card:hover .project-icon { transform: scale(1.1); }

.project-card .card-description { text-align: center; }

.accent-rose { background: linear-gradient(135deg, #ec4899, #e11d48); }
.accent-ocean { background: linear-gradient(135deg, #3b82f6, #0891b2); }
.accent-emerald { background: linear-gradient(135deg, #22c55e, #059669); }

/* === Transparency === */
.transparency-card {
  max-width: 42rem;
  margin: 0 auto;
  padding: 2rem;
  text-align: center;
}

.transparency-card .icon {
  color: var(--brand-blue);
  margin: 0 auto 1.5rem;
}

.transparency-card h3 {
  font-size: 1.5rem;
  color: var(--text-strong);
  margin-bottom: 1rem;
}

.transparency-card p { margin-bottom: 2rem; }

/* === Contact === */
.contact-channel {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem;
  border-radius: 0.5rem;
  background: var(--brand-tint);
}

.contact-channel + .contact-channel { margin-top: 1.5rem; }
.contact-channel .icon { color: var(--brand-blue); }
.contact-label { font-weight: 600; color: var(--text-strong); }

.social-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 1rem;
}

.social-link {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding: 1.5rem;
  border-radius: 0.5rem;
  background: var(--brand-tint);
  font-size: 0.875rem;
  font-weight: 500;
  transition: transform 300ms ease;
}

.social-link:hover { transform: translateY(-0.25rem) scale(1.05); }
.social-link:active { transform: scale(0.95); }
.social-link .icon { color: var(--brand-blue); }
.social-link:hover .icon { color: var(--brand-purple); }

/* === Footer === */
.footer {
  padding: 3rem 0;
  text-align: center;
  color: white;
  background: var(--footer);
}

.footer .brand {
  justify-content: center;
  margin-bottom: 1rem;
}

.footer .brand-name { font-size: 1.5rem; }
.footer-name { color: var(--text-faint); margin-bottom: 1rem; }
.footer-copy { color: var(--text-muted); font-size: 0.875rem; }

@media (max-width: 1023px) {
  .hero-grid { grid-template-columns: 1fr; }
  .two-col { grid-template-columns: 1fr; }
  .hero-title { font-size: 2.25rem; }
  .hero-subtitle { font-size: 1.5rem; }
}

@media (max-width: 767px) {
  .three-col { grid-template-columns: 1fr; }
}

/* === Animations === */
@keyframes slide-in {
  from { opacity: 0; transform: translateX(-20px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes rise {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes zoom-in {
  from { opacity: 0; transform: scale(0.9); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes unfold {
  from { opacity: 0; max-height: 0; }
  to { opacity: 1; max-height: 20rem; }
}

@keyframes bob {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, 10px); }
}
"#;

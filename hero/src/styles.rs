//! CSS and the inline script for the standalone hero page.
//!
//! The component itself only needs the float `@keyframes` (which it emits
//! inline); everything here is for [`crate::render_page`], where the hero is
//! served without WASM.

use crate::capabilities::VISIBILITY_THRESHOLD;
use crate::timeline::Pose;

/// Stylesheet for the hero section and its page shell.
pub const HERO_CSS: &str = r#"
:root {
    --background: #0b0d12;
    --foreground: #f5f7fa;
    --muted-foreground: #9aa3b2;
    --primary: #4f81e1;
    --accent: #8b5cf6;
    --border: rgba(255, 255, 255, 0.12);
    --radius: 0.75rem;
    --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--background);
    color: var(--foreground);
    font-family: var(--font-sans);
}

.hero {
    position: relative;
    min-height: 90vh;
    overflow: hidden;
    background: var(--background);
}

.hero-bg-image {
    position: absolute;
    inset: 0;
    background-size: cover;
    background-position: center;
    background-repeat: no-repeat;
    opacity: 0.1;
}

.hero-pattern {
    position: absolute;
    inset: 0;
}

.hero-pattern-dots {
    background-image: radial-gradient(circle at center, var(--primary) 0.5px, transparent 0.5px);
    background-size: 16px 16px;
    opacity: 0.03;
}

.hero-pattern-grid {
    background-image:
        linear-gradient(to right, var(--border) 1px, transparent 1px),
        linear-gradient(to bottom, var(--border) 1px, transparent 1px);
    background-size: 64px 64px;
}

.hero-pattern-gradient {
    background-image: linear-gradient(to bottom right, rgba(79, 129, 225, 0.03), transparent, rgba(139, 92, 246, 0.05));
}

.hero-orb {
    position: absolute;
    width: 24rem;
    height: 24rem;
    border-radius: 9999px;
    filter: blur(64px);
}

.hero-orb-primary {
    left: 25%;
    top: 25%;
    background: rgba(79, 129, 225, 0.03);
}

.hero-orb-accent {
    right: 25%;
    bottom: 25%;
    background: rgba(139, 92, 246, 0.03);
}

.hero-container {
    position: relative;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1rem;
}

.hero-stack {
    display: flex;
    min-height: 90vh;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 5rem 0;
    text-align: center;
}

.hero-badge-wrap {
    display: inline-flex;
    margin-bottom: 2rem;
}

.hero-badge,
.hero-pill {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    border: 1px solid var(--border);
    border-radius: 9999px;
    background: rgba(11, 13, 18, 0.5);
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
}

.hero-badge {
    backdrop-filter: blur(4px);
}

.hero-muted {
    color: var(--muted-foreground);
}

.hero-icon {
    width: 1rem;
    height: 1rem;
    color: var(--primary);
}

.hero-icon-pulse {
    animation: hero-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

@keyframes hero-pulse {
    50% { opacity: 0.5; }
}

.hero-headline {
    max-width: 56rem;
}

.hero-title,
.hero-highlight {
    font-size: clamp(3rem, 6vw, 4.5rem);
    font-weight: 700;
    letter-spacing: -0.025em;
    margin: 0;
}

.hero-highlight-wrap {
    position: relative;
    display: inline-block;
    margin-left: 0.75rem;
}

.hero-highlight {
    background: linear-gradient(to right, var(--primary), rgba(79, 129, 225, 0.8), var(--accent));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-star {
    position: absolute;
    right: -0.5rem;
    top: -0.5rem;
    width: 1.5rem;
    height: 1.5rem;
    color: rgba(79, 129, 225, 0.6);
}

.hero-subtitle {
    margin-top: 1.5rem;
    max-width: 42rem;
    font-size: 1.125rem;
    line-height: 1.625;
    color: var(--muted-foreground);
}

.hero-features {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    margin-top: 2rem;
}

.hero-float {
    margin: 3rem 0 2rem;
}

.hero-float-card {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: center;
    width: 16rem;
    height: 12rem;
    margin: 0 auto;
    border: 1px solid rgba(255, 255, 255, 0.04);
    border-radius: var(--radius);
    background: linear-gradient(to bottom right, rgba(79, 129, 225, 0.1), rgba(139, 92, 246, 0.1));
    backdrop-filter: blur(4px);
}

.hero-float-emoji {
    font-size: 3.75rem;
}

.hero-float-sheen {
    position: absolute;
    inset: 0;
    border-radius: var(--radius);
    background: linear-gradient(to bottom right, rgba(79, 129, 225, 0.05), transparent);
}

.hero-ctas {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    margin-top: 2.5rem;
}

@media (min-width: 640px) {
    .hero-ctas {
        flex-direction: row;
    }
}

.hero-btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 2rem;
    border-radius: var(--radius);
    font-size: 1rem;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.2s ease;
}

.hero-btn-primary {
    border: none;
    background: var(--primary);
    color: #fff;
    box-shadow: 0 10px 15px -3px rgba(79, 129, 225, 0.2);
}

.hero-btn-primary:hover {
    box-shadow: 0 20px 25px -5px rgba(79, 129, 225, 0.3);
}

.hero-btn-outline {
    border: 1px solid var(--border);
    background: transparent;
    color: var(--foreground);
    backdrop-filter: blur(4px);
}

.hero-btn-outline:hover {
    background: rgba(11, 13, 18, 0.5);
}

.hero-cta-arrow {
    width: 1.25rem;
    height: 1.25rem;
    color: currentColor;
    transition: transform 0.2s ease;
}

.hero-btn-primary:hover .hero-cta-arrow {
    transform: translateX(0.25rem);
}

.hero-trust {
    width: 100%;
    max-width: 56rem;
    margin-top: 5rem;
}

.hero-trust-text {
    margin-bottom: 1.5rem;
    font-size: 0.875rem;
    color: var(--muted-foreground);
}

.hero-logos {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    gap: 2rem;
    opacity: 0.5;
    filter: grayscale(1);
}

.hero-logo-slot {
    width: 6rem;
    height: 2rem;
    border-radius: 0.25rem;
    background: rgba(154, 163, 178, 0.1);
}

@media (prefers-reduced-motion: reduce) {
    .hero-float,
    .hero-icon-pulse {
        animation: none !important;
    }
}
"#;

const PAGE_SCRIPT_TEMPLATE: &str = r#"
(function () {
  var hero = document.getElementById('hero');
  if (!hero) { return; }

  hero.querySelectorAll('.hero-cta-motion').forEach(function (el) {
    var scale = function (value) { el.style.transform = 'scale(' + value + ')'; };
    el.addEventListener('pointerenter', function () { scale(el.dataset.scaleHover); });
    el.addEventListener('pointerleave', function () { scale(1); });
    el.addEventListener('pointerdown', function () { scale(el.dataset.scalePress); });
    el.addEventListener('pointerup', function () { scale(el.dataset.scaleHover); });
  });

  hero.querySelectorAll('[data-href]').forEach(function (el) {
    el.addEventListener('click', function () {
      var destination = el.getAttribute('data-href') || '';
      if (destination.charAt(0) === '#') {
        var target = document.getElementById(destination.slice(1));
        if (target) { target.scrollIntoView(); } else { window.location.hash = destination.slice(1); }
      } else if (/^(https?:)?\/\//.test(destination) || destination.indexOf('mailto:') === 0) {
        window.open(destination, '_blank');
      } else {
        window.location.href = destination;
      }
    });
  });

  if (__REVEALED__) { return; }

  var settle = function () {
    hero.querySelectorAll('[data-entrance]').forEach(function (el) {
      el.style.opacity = '__OPACITY__';
      el.style.transform = '__TRANSFORM__';
    });
  };
  if (!('IntersectionObserver' in window)) { settle(); return; }
  var observer = new IntersectionObserver(function (entries) {
    if (entries.some(function (entry) { return entry.isIntersecting; })) {
      settle();
      observer.disconnect();
    }
  }, { threshold: __THRESHOLD__ });
  observer.observe(hero);
})();
"#;

/// Inline script for the static page: CTA pointer scaling and click
/// navigation (same destination rules as the browser navigator), plus the
/// one-shot viewport reveal unless the page was rendered already revealed.
pub fn page_script(revealed: bool) -> String {
    let settled = Pose::SETTLED;
    PAGE_SCRIPT_TEMPLATE
        .replace("__REVEALED__", if revealed { "true" } else { "false" })
        .replace("__OPACITY__", &settled.opacity.to_string())
        .replace(
            "__TRANSFORM__",
            &format!("translate({}px, {}px)", settled.x, settled.y),
        )
        .replace("__THRESHOLD__", &VISIBILITY_THRESHOLD.to_string())
}

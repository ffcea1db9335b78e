pub const BASE_CSS: &str = r#"
.landing-page {
    min-height: 100vh;
    background: #04020a;
    color: #ffffff;
    overflow-x: hidden;
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    position: relative;
}

.grid-background {
    position: fixed;
    inset: 0;
    background-image:
        linear-gradient(rgba(104, 49, 243, 0.08) 1px, transparent 1px),
        linear-gradient(90deg, rgba(104, 49, 243, 0.08) 1px, transparent 1px);
    background-size: 48px 48px;
    opacity: 0.6;
    pointer-events: none;
    z-index: 0;
}

.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: rgba(0, 0, 0, 0.9);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
}

.nav-content {
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 2rem;
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    font-size: 1.25rem;
    font-weight: 700;
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
}

.nav-logo-mark {
    color: #6831f3;
}

.nav-desktop {
    display: flex;
    align-items: center;
    gap: 2rem;
}

.nav-link,
.nav-dropdown-item,
.nav-mobile-link {
    background: none;
    border: none;
    color: #d1d5db;
    font-size: 1rem;
    cursor: pointer;
    transition: color 0.3s ease;
}

.nav-link:hover,
.nav-dropdown-item:hover,
.nav-mobile-link:hover {
    color: #ffffff;
}

.nav-cta {
    background: #6831f3;
    color: #ffffff;
    border: none;
    padding: 0.5rem 1.5rem;
    border-radius: 8px;
    cursor: pointer;
    transition: background 0.3s ease;
}

.nav-cta:hover {
    background: #7c4dff;
}

.nav-dropdown {
    position: relative;
}

.nav-caret {
    margin-left: 0.25rem;
    display: inline-block;
    transition: transform 0.3s ease;
}

.nav-dropdown.open .nav-caret {
    transform: rotate(180deg);
}

.nav-dropdown-menu {
    position: absolute;
    top: 2.5rem;
    left: 0;
    min-width: 220px;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    padding: 1rem;
    background: rgba(29, 29, 29, 0.95);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 12px;
}

.nav-dropdown-item {
    text-align: left;
}

.burger-menu {
    display: none;
    background: none;
    border: none;
    color: #ffffff;
    font-size: 1.5rem;
    cursor: pointer;
}

.nav-mobile {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding: 1rem 2rem;
    background: rgba(0, 0, 0, 0.95);
    border-top: 1px solid rgba(255, 255, 255, 0.1);
}

.nav-mobile-link {
    text-align: left;
}

.hero {
    position: relative;
    z-index: 1;
    padding: 8rem 2rem 5rem;
    max-width: 1280px;
    margin: 0 auto;
    text-align: center;
}

.hero-badge {
    display: inline-block;
    padding: 0.5rem 1rem;
    background: rgba(104, 49, 243, 0.2);
    border: 1px solid rgba(104, 49, 243, 0.3);
    border-radius: 9999px;
    font-size: 0.875rem;
    margin-bottom: 1.5rem;
}

.hero h1 {
    font-size: clamp(2.25rem, 5vw, 3rem);
    font-weight: 900;
    line-height: 1.15;
    margin-bottom: 1.5rem;
}

.gradient-text {
    background: linear-gradient(90deg, #6831f3, #c084fc);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.hero-subtitle {
    font-size: 1.25rem;
    color: #d1d5db;
    max-width: 48rem;
    margin: 0 auto 2rem;
    line-height: 1.6;
}

.hero-cta-group {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    justify-content: center;
}

.cta-primary,
.cta-secondary,
.submit-button {
    padding: 1rem 2rem;
    border-radius: 12px;
    font-weight: 600;
    font-size: 1.125rem;
    cursor: pointer;
    transition: all 0.3s ease;
}

.cta-primary,
.submit-button {
    background: #6831f3;
    color: #ffffff;
    border: none;
}

.cta-primary:hover,
.submit-button:hover:not(:disabled) {
    background: #7c4dff;
    box-shadow: 0 0 40px rgba(104, 49, 243, 0.5);
    transform: scale(1.05);
}

.cta-secondary {
    background: transparent;
    color: #ffffff;
    border: 1px solid rgba(104, 49, 243, 0.3);
}

.cta-secondary:hover {
    border-color: #6831f3;
    background: rgba(255, 255, 255, 0.05);
}

.arrow {
    margin-left: 0.5rem;
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
    max-width: 56rem;
    margin: 4rem auto 0;
}

.stat-figure {
    font-size: 1.875rem;
    font-weight: 700;
    color: #6831f3;
    margin-bottom: 0.5rem;
}

.stat-label {
    font-size: 0.875rem;
    color: #9ca3af;
}

.section {
    position: relative;
    z-index: 1;
    padding: 5rem 2rem;
}

.section.tinted {
    background: linear-gradient(135deg, rgba(20, 0, 55, 0.35), rgba(4, 2, 10, 0.5));
}

.section-heading {
    text-align: center;
    max-width: 48rem;
    margin: 0 auto 4rem;
}

.section-heading h2 {
    font-size: clamp(1.875rem, 4vw, 2.25rem);
    font-weight: 700;
    margin-bottom: 1.5rem;
}

.section-heading p {
    font-size: 1.25rem;
    color: #d1d5db;
}

.accent {
    color: #6831f3;
}

.card-grid {
    max-width: 1280px;
    margin: 0 auto;
    display: grid;
    gap: 2rem;
}

.card-grid.two { grid-template-columns: repeat(2, 1fr); }
.card-grid.three { grid-template-columns: repeat(3, 1fr); }
.card-grid.four { grid-template-columns: repeat(4, 1fr); }

.card {
    background: rgba(29, 29, 29, 0.5);
    backdrop-filter: blur(6px);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 16px;
    padding: 2rem;
    transition: border-color 0.3s ease;
}

.card:hover {
    border-color: rgba(104, 49, 243, 0.4);
}

.card-icon,
.benefit-icon {
    width: 4rem;
    height: 4rem;
    border-radius: 12px;
    background: rgba(104, 49, 243, 0.2);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.75rem;
    margin-bottom: 1.5rem;
}

.card h3 {
    font-size: 1.25rem;
    font-weight: 600;
    margin-bottom: 1rem;
}

.card p {
    color: #d1d5db;
    margin-bottom: 1.5rem;
    line-height: 1.6;
}

.check-list {
    list-style: none;
    padding: 0;
    margin: 0;
    color: #9ca3af;
    font-size: 0.875rem;
}

.check-list li {
    padding: 0.25rem 0;
}

.check-list li::before {
    content: '✓';
    color: #4ade80;
    margin-right: 0.5rem;
}

.benefit {
    text-align: center;
}

.benefit-icon {
    margin: 0 auto 1.5rem;
}

.benefit-figure {
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 0.5rem;
}

.benefit.green .benefit-figure { color: #4ade80; }
.benefit.blue .benefit-figure { color: #60a5fa; }
.benefit.purple .benefit-figure { color: #c084fc; }
.benefit.yellow .benefit-figure { color: #facc15; }

.benefit-title {
    color: #d1d5db;
    font-weight: 500;
    margin-bottom: 0.5rem;
}

.benefit-body {
    font-size: 0.875rem;
    color: #9ca3af;
}

.stars {
    color: #facc15;
    margin-bottom: 1rem;
    letter-spacing: 0.2rem;
}

.testimonial .quote {
    font-style: italic;
}

.author {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.avatar {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    background: linear-gradient(135deg, #6831f3, #9333ea);
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
}

.author-name {
    font-weight: 600;
}

.author-role {
    font-size: 0.875rem;
    color: #9ca3af;
}

.form-wrapper {
    max-width: 56rem;
    margin: 0 auto;
}

.form-card {
    background: rgba(29, 29, 29, 0.5);
    backdrop-filter: blur(6px);
    border: 1px solid rgba(255, 255, 255, 0.15);
    border-radius: 16px;
    padding: 2rem;
}

.lead-form {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.form-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
}

.form-field label {
    display: block;
    font-size: 0.875rem;
    font-weight: 500;
    color: #d1d5db;
    margin-bottom: 0.5rem;
}

.form-field input,
.form-field textarea,
.form-field select {
    width: 100%;
    box-sizing: border-box;
    padding: 0.75rem 1rem;
    background: rgba(29, 29, 29, 0.3);
    border: 1px solid rgba(255, 255, 255, 0.15);
    border-radius: 8px;
    color: #ffffff;
    font-size: 1rem;
    transition: border-color 0.3s ease;
}

.form-field input:focus,
.form-field textarea:focus,
.form-field select:focus {
    outline: none;
    border-color: #6831f3;
    box-shadow: 0 0 0 2px rgba(104, 49, 243, 0.2);
}

.form-field input.invalid,
.form-field select.invalid {
    border-color: rgba(239, 68, 68, 0.4);
}

.field-error {
    margin-top: 0.25rem;
    font-size: 0.875rem;
    color: #f87171;
}

.submit-button {
    width: 100%;
}

.submit-button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.submit-label {
    display: inline-flex;
    align-items: center;
    justify-content: center;
}

.pulse {
    margin-right: 0.5rem;
    animation: pulse 1.5s ease-in-out infinite;
}

@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.4; }
}

.form-footnote {
    font-size: 0.875rem;
    color: #9ca3af;
    text-align: center;
}

.banner {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
    padding: 1rem;
    border-radius: 8px;
}

.banner-success {
    background: rgba(34, 197, 94, 0.2);
    border: 1px solid rgba(34, 197, 94, 0.4);
    color: #86efac;
}

.banner-error {
    background: rgba(239, 68, 68, 0.2);
    border: 1px solid rgba(239, 68, 68, 0.4);
    color: #fca5a5;
}

.banner-close {
    margin-left: auto;
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
}

.thank-you {
    text-align: center;
    padding: 3rem 2rem;
}

.thank-you-icon {
    font-size: 3rem;
    color: #4ade80;
    margin-bottom: 1rem;
}

.reveal {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.revealed {
    opacity: 1;
    transform: none;
}

.site-footer {
    position: relative;
    z-index: 1;
    padding: 3rem 2rem;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
}

.footer-grid {
    max-width: 1280px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 2fr 1fr 1fr;
    gap: 2rem;
}

.footer-grid p,
.footer-grid li {
    color: #9ca3af;
    font-size: 0.875rem;
}

.footer-grid ul {
    list-style: none;
    padding: 0;
}

.footer-legal {
    max-width: 1280px;
    margin: 3rem auto 0;
    padding-top: 2rem;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    text-align: center;
    font-size: 0.875rem;
    color: #9ca3af;
}

@media (max-width: 768px) {
    .nav-desktop {
        display: none;
    }

    .burger-menu {
        display: block;
    }

    .stats-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .card-grid.two,
    .card-grid.three,
    .card-grid.four,
    .form-row,
    .footer-grid {
        grid-template-columns: 1fr;
    }
}
"#;

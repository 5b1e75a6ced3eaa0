pub const SECTION_STYLES: &str = r#"
/* Page Sections */

.page-section {
  padding: var(--space-20) 0;
  background-color: var(--background);
}

.page-section.alt {
  background-color: var(--background-alt);
}

.section-header {
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  color: var(--text-primary);
  margin-bottom: var(--space-4);
}

.section-subtitle {
  font-size: 1.125rem;
  color: var(--text-secondary);
  max-width: 42rem;
  margin: 0 auto;
}

.subsection-title {
  font-size: 1.5rem;
  font-weight: 600;
  color: var(--text-primary);
  margin-bottom: var(--space-8);
  text-align: center;
}

/* Reveal on scroll */
.reveal {
  opacity: 0;
}

.reveal.revealed {
  animation: slide-up 600ms var(--easing-standard) both;
}

@keyframes slide-up {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes bounce-slow {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, -12px); }
}

@keyframes pulse {
  50% { opacity: 0.5; }
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* Navigation */
.nav-bar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  height: var(--header-height);
  background-color: var(--background);
  box-shadow: var(--shadow-md);
}

.nav-container {
  display: flex;
  height: 100%;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--primary);
  background: none;
  border: none;
  cursor: pointer;
}

.nav-links {
  display: none;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  background: none;
  border: none;
  cursor: pointer;
  font-size: 1rem;
  font-weight: 500;
  color: var(--text-secondary);
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--primary);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.theme-toggle, .menu-toggle {
  padding: var(--space-2);
  width: 40px;
  height: 40px;
  border: none;
  border-radius: var(--radius-md);
  background-color: var(--background-alt);
  color: var(--text-secondary);
  cursor: pointer;
}

.mobile-menu {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  padding: var(--space-4);
  background-color: var(--background);
  box-shadow: var(--shadow-lg);
}

.mobile-menu .nav-link {
  text-align: left;
  padding: var(--space-2) 0;
}

@media (min-width: 768px) {
  .nav-links {
    display: flex;
  }

  .menu-toggle, .mobile-menu {
    display: none;
  }
}

/* Hero */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  background: linear-gradient(135deg, var(--background-alt), var(--background));
}

.avatar {
  display: flex;
  align-items: center;
  justify-content: center;
  margin: 0 auto var(--space-8);
  width: 128px;
  height: 128px;
  border-radius: var(--radius-full);
  background: linear-gradient(90deg, var(--primary-light), var(--primary-dark));
  color: white;
  font-size: 2.25rem;
  font-weight: 700;
  box-shadow: var(--shadow-xl);
}

.avatar.large {
  width: 192px;
  height: 192px;
  font-size: 3.75rem;
  margin: 0;
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  color: var(--text-primary);
  margin-bottom: var(--space-6);
}

.gradient-text {
  background: linear-gradient(90deg, var(--primary), var(--primary-deep));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-role {
  font-size: 1.5rem;
  font-weight: 500;
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.hero-tagline {
  font-size: 1.125rem;
  color: var(--text-tertiary);
  max-width: 42rem;
  margin: 0 auto var(--space-12);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  justify-content: center;
  margin-bottom: var(--space-12);
}

.social-row {
  display: flex;
  justify-content: center;
  gap: var(--space-6);
}

.scroll-indicator {
  position: absolute;
  bottom: var(--space-8);
  left: 50%;
  width: 24px;
  height: 24px;
  color: var(--neutral-400);
  animation: bounce-slow 3s infinite;
}

/* About */
.two-column {
  display: grid;
  gap: var(--space-12);
  align-items: center;
}

.portrait {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 384px;
  border-radius: var(--radius-xl);
  background: linear-gradient(135deg, var(--primary-soft), var(--background-alt));
  margin-bottom: var(--space-8);
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-4);
}

.stat-card {
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background-color: var(--surface-muted);
  text-align: center;
}

.stat-value {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--primary);
  margin-bottom: var(--space-2);
}

.stat-label {
  color: var(--text-secondary);
}

.about-copy h3 {
  font-size: 1.5rem;
  font-weight: 600;
  color: var(--text-primary);
  margin-bottom: var(--space-4);
}

.about-copy h4 {
  font-size: 1.125rem;
  font-weight: 600;
  color: var(--text-primary);
  margin-bottom: var(--space-4);
}

.about-copy p {
  color: var(--text-secondary);
  line-height: 1.75;
  margin-bottom: var(--space-4);
}

.info-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  margin: var(--space-6) 0;
}

.info-item {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  color: var(--text-secondary);
}

.info-item .icon {
  width: 20px;
  height: 20px;
  color: var(--primary);
}

/* Skills */
.card-grid {
  display: grid;
  gap: var(--space-8);
}

.skill-card {
  padding: var(--space-8);
}

.card-heading {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  margin-bottom: var(--space-6);
}

.card-heading .icon {
  width: 24px;
  height: 24px;
  color: var(--primary);
}

.card-heading h3 {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-primary);
}

.skill-bar {
  margin-bottom: var(--space-4);
}

.skill-meta {
  display: flex;
  justify-content: space-between;
  margin-bottom: var(--space-2);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.skill-track {
  width: 100%;
  height: 8px;
  border-radius: var(--radius-full);
  background-color: var(--track);
}

.skill-fill {
  height: 8px;
  border-radius: var(--radius-full);
  background: linear-gradient(90deg, var(--primary), var(--primary-dark));
  transition: width var(--transition-slow) ease-out;
}

.extra-skills {
  margin-top: var(--space-16);
  text-align: center;
}

.extra-skills .chip-row {
  justify-content: center;
  gap: var(--space-3);
}

/* Projects */
.project-group {
  margin-bottom: var(--space-16);
}

.project-image {
  position: relative;
  overflow: hidden;
}

.project-image img {
  display: block;
  width: 100%;
  height: 256px;
  object-fit: cover;
  transition: transform 500ms var(--easing-standard);
}

.card:hover .project-image img {
  transform: scale(1.1);
}

.project-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-4);
  background-color: rgba(0, 0, 0, 0.4);
  opacity: 0;
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.card:hover .project-overlay {
  opacity: 1;
}

.overlay-link {
  display: inline-flex;
  width: 44px;
  height: 44px;
  padding: var(--space-3);
  border-radius: var(--radius-full);
  background-color: rgba(255, 255, 255, 0.2);
  color: white;
}

.project-body {
  padding: var(--space-8);
}

.project-body h4 {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-primary);
  margin-bottom: var(--space-3);
}

.project-body p {
  color: var(--text-secondary);
  line-height: 1.6;
  margin-bottom: var(--space-4);
}

.project-links {
  display: flex;
  gap: var(--space-4);
  margin-top: var(--space-6);
}

.text-link {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.text-link .icon {
  width: 16px;
  height: 16px;
}

.text-link:hover {
  color: var(--primary);
  text-decoration: none;
}

.compact .project-image img {
  height: 192px;
}

.compact .project-body {
  padding: var(--space-6);
}

.compact .project-body p {
  font-size: 0.875rem;
  display: -webkit-box;
  -webkit-line-clamp: 3;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.compact-footer {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-top: var(--space-4);
}

.centered-action {
  text-align: center;
  margin-top: var(--space-12);
}

/* Blog */
.post-card .project-image img {
  height: 192px;
}

.post-meta {
  display: flex;
  gap: var(--space-4);
  font-size: 0.875rem;
  color: var(--text-tertiary);
  margin-bottom: var(--space-3);
}

.post-meta span {
  display: inline-flex;
  align-items: center;
  gap: var(--space-1);
}

.post-meta .icon {
  width: 14px;
  height: 14px;
}

.newsletter {
  margin-top: var(--space-16);
  padding: var(--space-8);
  text-align: center;
}

.newsletter h3 {
  font-size: 1.5rem;
  font-weight: 600;
  color: var(--text-primary);
  margin-bottom: var(--space-4);
}

.newsletter p {
  color: var(--text-secondary);
  max-width: 42rem;
  margin: 0 auto var(--space-6);
}

.newsletter-form {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  justify-content: center;
  max-width: 28rem;
  margin: 0 auto;
}

.newsletter-form .form-input {
  flex: 1;
  min-width: 200px;
}

/* Contact */
.channel {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
}

.channel-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  padding: var(--space-3);
  border-radius: var(--radius-md);
  background-color: var(--primary-soft);
  color: var(--primary);
}

.channel h4 {
  font-weight: 500;
  color: var(--text-primary);
}

.channel a {
  color: var(--text-secondary);
}

.availability {
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background: linear-gradient(90deg, var(--primary-soft), var(--background-alt));
}

.availability-badge {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  margin-top: var(--space-3);
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--success);
}

.availability-dot {
  width: 8px;
  height: 8px;
  border-radius: var(--radius-full);
  background-color: var(--success);
  animation: pulse 2s infinite;
}

.form-card {
  padding: var(--space-8);
  background-color: var(--surface-muted);
}

/* Footer */
.site-footer {
  background-color: var(--neutral-900);
  color: white;
  padding: var(--space-12) 0;
}

.footer-grid {
  display: grid;
  gap: var(--space-8);
}

.site-footer h3 {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.site-footer h4 {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.site-footer p, .site-footer li, .footer-link {
  color: var(--neutral-400);
  line-height: 1.75;
}

.site-footer ul {
  list-style: none;
}

.footer-link {
  background: none;
  border: none;
  cursor: pointer;
  font-size: 1rem;
  padding: 0;
}

.footer-link:hover {
  color: white;
}

.footer-social {
  display: inline-flex;
  width: 36px;
  height: 36px;
  padding: var(--space-2);
  border-radius: var(--radius-md);
  background-color: var(--neutral-800);
  color: white;
  margin-right: var(--space-4);
  margin-top: var(--space-4);
}

.footer-bottom {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  align-items: center;
  gap: var(--space-4);
  margin-top: var(--space-12);
  padding-top: var(--space-8);
  border-top: 1px solid var(--neutral-800);
  color: var(--neutral-400);
}

.footer-bottom .heart {
  display: inline-flex;
  width: 16px;
  height: 16px;
  color: var(--danger);
  vertical-align: middle;
}

.back-to-top {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border: none;
  border-radius: var(--radius-md);
  background-color: var(--primary);
  color: white;
  cursor: pointer;
}

.back-to-top .icon {
  width: 16px;
  height: 16px;
}

@media (min-width: 768px) {
  .card-grid {
    grid-template-columns: repeat(2, 1fr);
  }

  .card-grid.three {
    grid-template-columns: repeat(2, 1fr);
  }

  .footer-grid {
    grid-template-columns: repeat(3, 1fr);
  }

  .hero-title {
    font-size: 3.75rem;
  }
}

@media (min-width: 1024px) {
  .two-column {
    grid-template-columns: repeat(2, 1fr);
  }

  .card-grid.three {
    grid-template-columns: repeat(3, 1fr);
  }
}
"#;

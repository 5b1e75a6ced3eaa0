pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-4) var(--space-8);
  border-radius: var(--radius-md);
  font-weight: 500;
  font-size: 1rem;
  cursor: pointer;
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
  border: 2px solid transparent;
  outline: none;
}

.btn:hover {
  text-decoration: none;
}

.btn-primary {
  background-color: var(--primary);
  color: white;
  box-shadow: var(--shadow-lg);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
  box-shadow: var(--shadow-xl);
  transform: scale(1.05);
}

.btn-primary:disabled {
  background-color: var(--primary-light);
  transform: none;
  cursor: not-allowed;
}

.btn-outline {
  border-color: var(--primary);
  color: var(--primary);
  background: transparent;
}

.btn-outline:hover {
  background-color: var(--primary);
  color: white;
  transform: scale(1.05);
}

.btn-link {
  background: none;
  border: none;
  padding: 0;
  color: var(--primary);
}

.btn-block {
  width: 100%;
}

/* Chips */
.chip {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--primary-soft);
  color: var(--primary-soft-text);
  font-size: 0.875rem;
  font-weight: 500;
}

.chip-sm {
  padding: 2px var(--space-2);
  border-radius: var(--radius-md);
  font-size: 0.75rem;
}

.chip-muted {
  background-color: var(--track);
  color: var(--text-secondary);
}

.chip-outline {
  padding: var(--space-2) var(--space-4);
  background-color: var(--surface);
  color: var(--text-secondary);
  border: 1px solid var(--border);
  box-shadow: var(--shadow-md);
  transition: transform var(--transition-normal) var(--easing-standard);
}

.chip-outline:hover {
  transform: scale(1.05);
}

.chip-row {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

/* Cards */
.card {
  background-color: var(--surface);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-lg);
  overflow: hidden;
  transition: transform 500ms var(--easing-standard),
              box-shadow 500ms var(--easing-standard);
}

.card-grow:hover {
  transform: scale(1.05);
  box-shadow: var(--shadow-xl);
}

/* Icons */
.icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  line-height: 0;
}

.icon svg {
  width: 100%;
  height: 100%;
  fill: none;
  stroke: currentColor;
  stroke-width: 2;
  stroke-linecap: round;
  stroke-linejoin: round;
}

.icon-button {
  display: inline-flex;
  padding: var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--surface);
  color: var(--text-secondary);
  box-shadow: var(--shadow-lg);
  transition: transform var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

.icon-button:hover {
  color: var(--primary);
  transform: scale(1.1);
}

/* Form Elements */
.form-group {
  margin-bottom: var(--space-6);
}

.form-row {
  display: grid;
  gap: var(--space-6);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast) var(--easing-standard);
}

.form-input:focus {
  outline: none;
  border-color: transparent;
  box-shadow: 0 0 0 2px var(--primary);
}

textarea.form-input {
  resize: none;
}

.spinner {
  width: 20px;
  height: 20px;
  border: 2px solid white;
  border-top-color: transparent;
  border-radius: var(--radius-full);
  animation: spin 1s linear infinite;
}

@media (min-width: 768px) {
  .form-row {
    grid-template-columns: repeat(2, 1fr);
  }
}
"#;

pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #3B82F6;          /* Primary brand blue */
  --primary-light: #60A5FA;    /* Lighter blue for hover states */
  --primary-dark: #2563EB;     /* Darker blue for active states */
  --primary-deep: #1D4ED8;
  --primary-soft: #DBEAFE;     /* Chip and icon backgrounds */
  --primary-soft-text: #1D4ED8;
  --success: #10B981;
  --danger: #EF4444;

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Layout */
  --header-height: 80px;
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-20: 80px;

  /* Border Radius */
  --radius-md: 8px;
  --radius-lg: 12px;
  --radius-xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-slow: 1000ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Light theme surfaces */
.app.light {
  --background: #FFFFFF;
  --background-alt: var(--neutral-50);
  --surface: #FFFFFF;
  --surface-muted: var(--neutral-50);
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --border: var(--neutral-300);
  --track: var(--neutral-200);
  color-scheme: light;
}

/* Dark theme surfaces */
.app.dark {
  --background: var(--neutral-900);
  --background-alt: var(--neutral-800);
  --surface: var(--neutral-900);
  --surface-muted: var(--neutral-800);
  --text-primary: #FFFFFF;
  --text-secondary: var(--neutral-400);
  --text-tertiary: var(--neutral-400);
  --border: var(--neutral-600);
  --track: var(--neutral-700);
  --primary-soft: #1E3A8A;
  --primary-soft-text: #93C5FD;
  color-scheme: dark;
}
"#;

//! Design tokens and the page stylesheet built from them.
//!
//! Every section is styled through class names scoped under the page root;
//! the only values that vary are the ones held in [`Theme`].

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub bg: &'static str,
    pub white: &'static str,
    pub light_grey: &'static str,
    pub muted_text: &'static str,
    pub placeholder: &'static str,
    pub placeholder_text: &'static str,
    pub placeholder_soft: &'static str,
    pub placeholder_soft_text: &'static str,
    pub section_padding: &'static str,
    pub font_family: &'static str,
    /// Below this width two-column sections stack.
    pub tablet_breakpoint: &'static str,
    pub mobile_breakpoint: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#623f35",
            accent: "#E07A5F",
            text: "#264653",
            bg: "#F4F1DE",
            white: "#FFFFFF",
            light_grey: "#f0f0f0",
            muted_text: "#555",
            placeholder: "#ccc",
            placeholder_text: "#666",
            placeholder_soft: "#eee",
            placeholder_soft_text: "#888",
            section_padding: "5rem 8%",
            font_family: "'Montserrat', sans-serif",
            tablet_breakpoint: "900px",
            mobile_breakpoint: "600px",
        }
    }
}

/// Renders the full page stylesheet. Top-level declarations apply to the
/// page root, every other rule is scoped beneath it when mounted.
pub fn stylesheet(theme: &Theme) -> String {
    format!(
        r#"
        width: 100%;
        overflow-x: hidden;
        font-family: {font};
        color: {text};

        .section {{
            padding: {padding};
            font-family: {font};
            color: {text};
            box-sizing: border-box;
        }}

        .section h2 {{
            font-size: 2.5rem;
            font-weight: 800;
        }}

        .accent {{
            color: {accent};
        }}

        .reveal {{
            opacity: 0;
            transition-property: opacity, transform;
            transition-duration: 0.8s;
            transition-timing-function: ease;
        }}

        .reveal.fade-up {{
            transform: translateY(20px);
        }}

        .reveal.fade-left {{
            transform: translateX(20px);
        }}

        .reveal.revealed {{
            opacity: 1;
            transform: none;
        }}

        .hero {{
            display: flex;
            flex-direction: row;
            align-items: center;
            justify-content: space-between;
            padding: 4rem 8%;
            background-color: {bg};
            min-height: 80vh;
            gap: 4rem;
            overflow: hidden;
        }}

        .hero-content {{
            flex: 1;
            max-width: 600px;
        }}

        .hero-badge {{
            display: block;
            font-size: 0.9rem;
            font-weight: 700;
            letter-spacing: 0.1em;
            color: {primary};
            text-transform: uppercase;
            margin-bottom: 1rem;
        }}

        .hero h1 {{
            font-size: 3.5rem;
            line-height: 1.1;
            color: {text};
            margin-bottom: 1.5rem;
            font-weight: 800;
        }}

        .hero-subheading {{
            font-size: 1.1rem;
            line-height: 1.6;
            margin-bottom: 2.5rem;
            opacity: 0.8;
            max-width: 500px;
        }}

        .hero-cta {{
            padding: 1rem 2rem;
            font-size: 1rem;
            font-weight: 600;
            color: {white};
            background-color: {primary};
            border: none;
            border-radius: 8px;
            cursor: pointer;
            box-shadow: 0 4px 14px rgba(0, 0, 0, 0.15);
            transition: transform 0.2s ease;
        }}

        .hero-cta:hover {{
            transform: scale(1.05);
        }}

        .hero-cta:active {{
            transform: scale(0.95);
        }}

        .hero-image {{
            flex: 1;
            height: 500px;
            border-radius: 20px;
            overflow: hidden;
            box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
        }}

        .image-placeholder {{
            width: 100%;
            height: 100%;
            background-color: {placeholder};
            display: flex;
            align-items: center;
            justify-content: center;
            color: {placeholder_text};
            font-weight: bold;
            font-size: 1.2rem;
        }}

        .mission {{
            background-color: {white};
            text-align: center;
        }}

        .mission h2 {{
            color: {primary};
            margin-bottom: 1.5rem;
        }}

        .mission p {{
            font-size: 1.125rem;
            line-height: 1.8;
            max-width: 800px;
            margin: 0 auto;
            opacity: 0.9;
        }}

        .benefits {{
            background-color: {bg};
        }}

        .benefits h2 {{
            margin-bottom: 3rem;
            text-align: center;
        }}

        .benefit-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 2rem;
        }}

        .benefit-card {{
            background-color: {white};
            padding: 2rem;
            border-radius: 12px;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
        }}

        .benefit-card h3 {{
            color: {primary};
            font-size: 1.25rem;
            font-weight: 700;
            margin-bottom: 1rem;
        }}

        .benefit-card p {{
            line-height: 1.6;
        }}

        .services {{
            background-color: {white};
            display: flex;
            gap: 4rem;
            align-items: center;
            flex-wrap: wrap;
        }}

        .services-copy {{
            flex: 1;
            min-width: 300px;
        }}

        .services-copy h2 {{
            margin-bottom: 1.5rem;
        }}

        .services-copy p {{
            margin-bottom: 2rem;
            font-size: 1.1rem;
            line-height: 1.6;
        }}

        .role-list {{
            list-style: none;
            padding: 0;
        }}

        .role-list li {{
            display: flex;
            align-items: center;
            gap: 10px;
            margin-bottom: 0.8rem;
            font-size: 1.1rem;
        }}

        .role-check {{
            color: {accent};
            font-weight: bold;
        }}

        .services-image {{
            flex: 1;
            height: 400px;
            background-color: {placeholder_soft};
            border-radius: 20px;
            display: flex;
            align-items: center;
            justify-content: center;
            color: {placeholder_soft_text};
        }}

        .about {{
            background-color: {primary};
            color: {white};
            text-align: center;
        }}

        .about-inner {{
            max-width: 800px;
            margin: 0 auto;
        }}

        .about h2 {{
            color: {accent};
            margin-bottom: 1.5rem;
        }}

        .about p {{
            font-size: 1.1rem;
            line-height: 1.8;
            margin-bottom: 2rem;
        }}

        .team-placeholder {{
            width: 100px;
            height: 100px;
            background-color: {white};
            border-radius: 50%;
            margin: 0 auto;
            display: flex;
            align-items: center;
            justify-content: center;
            color: {primary};
        }}

        .faq {{
            background-color: {white};
        }}

        .faq h2 {{
            text-align: center;
            margin-bottom: 3rem;
        }}

        .disclosure-list {{
            max-width: 800px;
            margin: 0 auto;
        }}

        .disclosure-item {{
            margin-bottom: 1rem;
            border-bottom: 1px solid {light_grey};
        }}

        .disclosure-header {{
            width: 100%;
            text-align: left;
            padding: 1.5rem;
            background: none;
            border: none;
            font-size: 1.1rem;
            font-weight: 600;
            cursor: pointer;
            display: flex;
            justify-content: space-between;
            gap: 1rem;
            color: {text};
            font-family: inherit;
        }}

        .disclosure-glyph {{
            color: {accent};
        }}

        .disclosure-answer p {{
            padding: 0 1.5rem 1.5rem;
            margin: 0;
            line-height: 1.6;
            color: {muted};
        }}

        .contact {{
            background-color: {bg};
            text-align: center;
        }}

        .contact h2 {{
            margin-bottom: 1rem;
        }}

        .contact-lead {{
            font-size: 1.2rem;
            margin-bottom: 2rem;
        }}

        .contact-cards {{
            display: flex;
            justify-content: center;
            gap: 2rem;
            flex-wrap: wrap;
            margin-bottom: 3rem;
        }}

        .contact-card {{
            background: {white};
            padding: 2rem;
            border-radius: 10px;
            min-width: 250px;
        }}

        .contact-card h4 {{
            color: {primary};
            margin-bottom: 0.5rem;
        }}

        .contact-value {{
            font-weight: 600;
        }}

        .contact-address {{
            opacity: 0.6;
        }}

        .footer {{
            padding: 2rem 5%;
            background-color: {primary};
            color: {white};
            display: flex;
            justify-content: space-between;
            align-items: center;
            font-size: 0.9rem;
        }}

        .footer-links {{
            display: flex;
            gap: 2rem;
        }}

        @media (max-width: {tablet}) {{
            .hero {{
                flex-direction: column;
                align-items: stretch;
                gap: 2rem;
            }}

            .hero-image {{
                height: 300px;
            }}

            .services {{
                flex-direction: column;
                align-items: stretch;
            }}

            .services-image {{
                height: 280px;
            }}
        }}

        @media (max-width: {mobile}) {{
            .hero h1 {{
                font-size: 2.4rem;
            }}

            .section h2 {{
                font-size: 1.8rem;
            }}

            .footer {{
                flex-direction: column;
                gap: 1rem;
                text-align: center;
            }}
        }}
        "#,
        font = theme.font_family,
        text = theme.text,
        padding = theme.section_padding,
        accent = theme.accent,
        primary = theme.primary,
        bg = theme.bg,
        white = theme.white,
        light_grey = theme.light_grey,
        muted = theme.muted_text,
        placeholder = theme.placeholder,
        placeholder_text = theme.placeholder_text,
        placeholder_soft = theme.placeholder_soft,
        placeholder_soft_text = theme.placeholder_soft_text,
        tablet = theme.tablet_breakpoint,
        mobile = theme.mobile_breakpoint,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tokens_match_brand() {
        let theme = Theme::default();
        assert_eq!(theme.primary, "#623f35");
        assert_eq!(theme.accent, "#E07A5F");
        assert_eq!(theme.text, "#264653");
        assert_eq!(theme.bg, "#F4F1DE");
        assert_eq!(theme.section_padding, "5rem 8%");
    }

    #[test]
    fn stylesheet_uses_theme_values() {
        let theme = Theme {
            primary: "#010101",
            accent: "#020202",
            ..Theme::default()
        };
        let css = stylesheet(&theme);
        assert!(css.contains("background-color: #010101;"));
        assert!(css.contains("color: #020202;"));
        assert!(!css.contains("#623f35"));
    }

    #[test]
    fn placeholder_colours_come_from_tokens() {
        let theme = Theme {
            placeholder_text: "#0a0a0a",
            placeholder_soft: "#0b0b0b",
            placeholder_soft_text: "#0c0c0c",
            ..Theme::default()
        };
        let css = stylesheet(&theme);
        assert!(css.contains("color: #0a0a0a;"));
        assert!(css.contains("background-color: #0b0b0b;"));
        assert!(css.contains("color: #0c0c0c;"));
        for literal in ["#666", "#eee", "#888"] {
            assert!(!css.contains(literal), "{} is hard-coded", literal);
        }
    }

    #[test]
    fn stylesheet_has_breakpoints() {
        let css = stylesheet(&Theme::default());
        assert!(css.contains("@media (max-width: 900px)"));
        assert!(css.contains("@media (max-width: 600px)"));
    }

    #[test]
    fn stylesheet_braces_balance() {
        let css = stylesheet(&Theme::default());
        let open = css.matches('{').count();
        let close = css.matches('}').count();
        assert_eq!(open, close);
        assert!(!css.contains("{{"));
    }
}

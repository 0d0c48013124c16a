//! Static package parts shared by every generated presentation.
//!
//! The deck uses a single master with a single blank layout; all visible
//! content lives on the slides themselves.

macro_rules! resource {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/", $path))
    };
}

/// Slide master with a color map and one blank layout (`rId1`).
pub fn slide_master_xml() -> &'static str {
    resource!("slideMasters/slideMaster1.xml")
}

/// Blank slide layout.
pub fn blank_layout_xml() -> &'static str {
    resource!("slideLayouts/slideLayout1.xml")
}

/// Theme with complete color, font and format schemes.
pub fn theme_xml() -> &'static str {
    resource!("theme/theme1.xml")
}

pub fn pres_props_xml() -> &'static str {
    resource!("presProps.xml")
}

pub fn view_props_xml() -> &'static str {
    resource!("viewProps.xml")
}

pub fn table_styles_xml() -> &'static str {
    resource!("tableStyles.xml")
}

pub fn core_props_xml() -> &'static str {
    resource!("docProps/core.xml")
}

pub fn app_props_xml() -> &'static str {
    resource!("docProps/app.xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_references_single_layout() {
        let master = slide_master_xml();
        assert_eq!(master.matches("<p:sldLayoutId ").count(), 1);
        assert!(master.contains(r#"r:id="rId1""#));
    }

    #[test]
    fn test_layout_is_blank() {
        assert!(blank_layout_xml().contains(r#"type="blank""#));
    }

    #[test]
    fn test_theme_format_scheme_is_complete() {
        let theme = theme_xml();
        for list in [
            "a:fillStyleLst",
            "a:lnStyleLst",
            "a:effectStyleLst",
            "a:bgFillStyleLst",
        ] {
            assert!(theme.contains(&format!("<{list}>")), "missing {list}");
        }
        assert_eq!(theme.matches("<a:effectStyle>").count(), 3);
        assert_eq!(theme.matches("<a:ln ").count(), 3);
    }

    #[test]
    fn test_templates_start_with_declaration() {
        for xml in [
            slide_master_xml(),
            blank_layout_xml(),
            theme_xml(),
            pres_props_xml(),
            view_props_xml(),
            table_styles_xml(),
            core_props_xml(),
            app_props_xml(),
        ] {
            assert!(xml.starts_with("<?xml"));
        }
    }
}

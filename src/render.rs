//! HTML rendering for the status page.
//!
//! The page is a fixed sequence of fragments. Every dynamic string passes
//! through [`escape`] on its way in; probe output, configuration and the
//! extension table are all treated as untrusted.

use crate::report::StatusReport;

/// Page banner.
const BANNER: &str = "微拍堂-后端五组-docker环境";

/// List styling shared by both sections.
const LIST_STYLE: &str = "font-size:13px";

/// Escape a dynamic string for use as HTML text content.
fn escape(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

/// Render the full status page for one report.
pub fn render_page(report: &StatusReport) -> String {
    let mut page = String::new();

    page.push_str(&format!(
        "<h2 style=\"text-align: center;\">{BANNER}</h2>\n"
    ));

    page.push_str("<h3>版本信息</h3>\n");
    page.push_str(&format!("<ul style=\"{LIST_STYLE}\">\n"));
    page.push_str(&format!(
        "<li>Rust版本：{}</li>\n",
        escape(&report.runtime_version)
    ));
    page.push_str(&format!(
        "<li>Nginx版本：{}</li>\n",
        escape(&report.server_software)
    ));
    for service in &report.services {
        page.push_str(&format!(
            "<li>{}服务器版本：{}</li>\n",
            escape(&service.service),
            escape(service.outcome.display_text())
        ));
    }
    page.push_str("</ul>\n");

    page.push_str("<h3>已安装扩展</h3>\n");
    page.push_str(&format!("<ul style=\"{LIST_STYLE}\">\n"));
    for extension in &report.extensions {
        page.push_str(&format!(
            "<li>{}={}</li>\n",
            escape(&extension.name),
            escape(&extension.version)
        ));
    }
    page.push_str("</ul>\n");

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeOutcome;
    use crate::report::extensions::ExtensionInfo;
    use crate::report::ServiceReport;

    fn report() -> StatusReport {
        StatusReport {
            runtime_version: "1.82.0".to_string(),
            server_software: "nginx/1.24.0".to_string(),
            services: vec![
                ServiceReport {
                    service: "MySQL".to_string(),
                    outcome: ProbeOutcome::Version("8.0.31".to_string()),
                },
                ServiceReport {
                    service: "Redis".to_string(),
                    outcome: ProbeOutcome::Unavailable("Redis 扩展未安装 ×".to_string()),
                },
                ServiceReport {
                    service: "MongoDB".to_string(),
                    outcome: ProbeOutcome::Unavailable("Connection refused".to_string()),
                },
            ],
            extensions: vec![ExtensionInfo {
                name: "axum".to_string(),
                version: "0.8.1".to_string(),
            }],
        }
    }

    #[test]
    fn page_carries_banner_and_section_headers() {
        let page = render_page(&report());
        assert!(page.contains("微拍堂-后端五组-docker环境"));
        assert!(page.contains("<h3>版本信息</h3>"));
        assert!(page.contains("<h3>已安装扩展</h3>"));
    }

    #[test]
    fn successful_probe_renders_its_version() {
        let page = render_page(&report());
        assert!(page.contains("MySQL服务器版本：8.0.31"));
    }

    #[test]
    fn missing_driver_renders_not_installed() {
        let page = render_page(&report());
        assert!(page.contains("Redis 扩展未安装 ×"));
    }

    #[test]
    fn failed_probe_renders_its_error_inline() {
        let page = render_page(&report());
        assert!(page.contains("<li>MongoDB服务器版本：Connection refused</li>"));
    }

    #[test]
    fn extensions_render_as_name_version_pairs() {
        let page = render_page(&report());
        assert!(page.contains("<li>axum=0.8.1</li>"));
    }

    #[test]
    fn server_software_is_escaped() {
        let mut hostile = report();
        hostile.server_software = "<script>alert(1)</script>".to_string();
        let page = render_page(&hostile);
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn probe_errors_are_escaped() {
        let mut hostile = report();
        hostile.services[2].outcome =
            ProbeOutcome::Unavailable("error: <b>refused</b> & dropped".to_string());
        let page = render_page(&hostile);
        assert!(!page.contains("<b>"));
        assert!(page.contains("&lt;b&gt;refused&lt;/b&gt; &amp; dropped"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let r = report();
        assert_eq!(render_page(&r), render_page(&r));
    }
}

//! 粘贴图片过滤全链路测试：HTML + RTF 进，改写后的 HTML 出。

use std::cell::RefCell;
use std::rc::Rc;

use paste_image_filter::{FilterEvent, PasteImageFilter, ReportSink};

/// 测试用上报收集器；事件存在共享单元里，克隆体装箱注入过滤器后仍可断言。
#[derive(Default, Clone)]
struct CollectingSink {
    events: Rc<RefCell<Vec<FilterEvent>>>,
}

impl ReportSink for CollectingSink {
    fn report(&self, event: FilterEvent) {
        self.events.borrow_mut().push(event);
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn allow_images(_selector: &str) -> bool {
    true
}

/// 一个 PNG 分组 + 一个 JPEG 分组的典型 Word 粘贴 RTF。
const TWO_IMAGE_RTF: &str = concat!(
    r"{\rtf1\ansi",
    r"{\pict\pngblip\picw100\pich100{\*\blipuid a1b2c3} 89504e47}",
    r"{\pict\jpegblip\picw200{\*\blipuid d4e5f6} ffd8ffe0}",
    r"}",
);

#[test]
fn rewrites_file_placeholders_in_document_order() {
    init_logging();
    let filter = PasteImageFilter::new();
    let html = concat!(
        r#"<p>before</p><img src="file://C:\tmp\image1.png">"#,
        r#"<p>between</p><img src="file://C:\tmp\image2.jpg"><p>after</p>"#,
    );

    let result = filter.apply(html, &allow_images, Some(TWO_IMAGE_RTF));

    assert_eq!(
        result,
        concat!(
            r#"<p>before</p><img src="data:image/png;base64,iVBORw==">"#,
            r#"<p>between</p><img src="data:image/jpeg;base64,/9j/4A==">"#,
            r#"<p>after</p>"#,
        )
    );
}

#[test]
fn applying_filter_twice_is_idempotent() {
    init_logging();
    let filter = PasteImageFilter::new();
    let html = r#"<img src="file://C:\tmp\image1.png"><img src="file://C:\tmp\image2.jpg">"#;

    let first = filter.apply(html, &allow_images, Some(TWO_IMAGE_RTF));
    let second = filter.apply(&first, &allow_images, Some(TWO_IMAGE_RTF));

    assert_ne!(first, html);
    assert_eq!(second, first);
}

#[test]
fn count_mismatch_leaves_html_unchanged_and_reports() {
    init_logging();
    let sink = CollectingSink::default();
    let filter = PasteImageFilter::with_sink(Box::new(sink.clone()));
    let html = r#"<img src="file://a.png"><img src="file://b.png"><img src="file://c.png">"#;

    let result = filter.apply(html, &allow_images, Some(TWO_IMAGE_RTF));

    assert_eq!(result, html);
    assert_eq!(
        sink.events.borrow().as_slice(),
        &[FilterEvent::ExtractionCountMismatch {
            rtf_count: 2,
            html_count: 3,
        }]
    );
}

#[test]
fn resolved_urls_and_vml_placeholders_are_untouched() {
    init_logging();
    let filter = PasteImageFilter::new();
    // 第二个标签是已解析的 URL：位置对应存在，但不带 file:// 前缀，不许改写
    let html = r#"<img src="file://C:\tmp\image1.png"><img src="https://example.com/logo.png">"#;

    let result = filter.apply(html, &allow_images, Some(TWO_IMAGE_RTF));

    assert!(result.starts_with(r#"<img src="data:image/png;base64,"#));
    assert!(result.ends_with(r#"<img src="https://example.com/logo.png">"#));
}

#[test]
fn decorative_shape_group_does_not_shift_correspondence() {
    init_logging();
    let filter = PasteImageFilter::new();
    let rtf = concat!(
        r"{\rtf1",
        r"{\pict\pngblip\defshp 11111111}",
        r"{\pict\pngblip{\*\blipuid a1} 89504e47}",
        r"}",
    );
    let html = r#"<img src="file://real.png">"#;

    let result = filter.apply(html, &allow_images, Some(rtf));

    assert_eq!(result, r#"<img src="data:image/png;base64,iVBORw==">"#);
}

#[test]
fn duplicate_groups_rewrite_both_placeholders_with_same_data_url() {
    init_logging();
    let filter = PasteImageFilter::new();
    let rtf = concat!(
        r"{\rtf1",
        r"{\pict\pngblip{\*\blipuid a1} 89504e47}",
        r"{\pict\pngblip{\*\blipuid a1} 89504e47}",
        r"}",
    );
    let html = r#"<img src="file://one.png"><img src="file://two.png">"#;

    let result = filter.apply(html, &allow_images, Some(rtf));

    assert_eq!(
        result,
        concat!(
            r#"<img src="data:image/png;base64,iVBORw==">"#,
            r#"<img src="data:image/png;base64,iVBORw==">"#,
        )
    );
}

#[test]
fn unsupported_position_skips_single_tag_and_continues() {
    init_logging();
    let sink = CollectingSink::default();
    let filter = PasteImageFilter::with_sink(Box::new(sink.clone()));
    let rtf = concat!(
        r"{\rtf1",
        r"{\pict\wmetafile8\picw10 0100090000}",
        r"{\pict\pngblip{\*\blipuid a1} 89504e47}",
        r"}",
    );
    let html = r#"<img src="file://shape.wmf"><img src="file://real.png">"#;

    let result = filter.apply(html, &allow_images, Some(rtf));

    assert_eq!(
        result,
        concat!(
            r#"<img src="file://shape.wmf">"#,
            r#"<img src="data:image/png;base64,iVBORw==">"#,
        )
    );
    assert_eq!(
        sink.events.borrow().as_slice(),
        &[FilterEvent::UnsupportedImageType {
            image_type: "image/wmf".to_string(),
            index: 0,
        }]
    );
}

#[test]
fn header_footer_pictures_do_not_leak_into_extraction() {
    init_logging();
    let filter = PasteImageFilter::new();
    let rtf = concat!(
        r"{\rtf1",
        r"{\headerr{\pict\pngblip 22222222}}",
        r"{\footerl{\pict\jpegblip 33333333}}",
        r"{\pict\pngblip{\*\blipuid a1} 89504e47}",
        r"}",
    );
    let html = r#"<img src="file://body.png">"#;

    let result = filter.apply(html, &allow_images, Some(rtf));

    assert_eq!(result, r#"<img src="data:image/png;base64,iVBORw==">"#);
}

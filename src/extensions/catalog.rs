//! Built-in extension catalog.

use crate::models::ExtensionInfo;

/// (extension, category, description, common use, applications)
type CatalogRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
);

#[rustfmt::skip]
const CATALOG: &[CatalogRow] = &[
    (".mp4", "Video", "MPEG-4 multimedia container format", "Storing video and audio, used for streaming", &["VLC", "Windows Media Player"]),
    (".avi", "Video", "Audio Video Interleave multimedia container", "Storing audio and video data", &["VLC", "Windows Media Player", "Media Player Classic"]),
    (".mkv", "Video", "Matroska Multimedia Container", "High quality video with multiple audio tracks", &["VLC", "Windows Media Player"]),
    (".mov", "Video", "QuickTime Movie format", "Apple's proprietary video format", &["QuickTime Player", "VLC", "iMovie"]),
    (".webm", "Video", "WebM video format designed for web", "HTML5 video streaming", &["Web Browsers", "VLC", "Chrome"]),
    (".mp3", "Audio", "MPEG Audio Layer III", "Compressed audio for music and podcasts", &["iTunes", "Windows Media Player", "VLC"]),
    (".wav", "Audio", "Waveform Audio File Format", "Uncompressed audio, high quality", &["Audacity", "Windows Media Player", "Adobe Audition"]),
    (".flac", "Audio", "Free Lossless Audio Codec", "Lossless audio compression", &["VLC", "Foobar2000", "Audacity"]),
    (".aac", "Audio", "Advanced Audio Coding", "Better sound quality than MP3 at the same bitrate", &["iTunes", "VLC", "Windows Media Player"]),
    (".jpg", "Image", "Joint Photographic Experts Group", "Compressed image format for photos", &["Photos", "Paint", "Photoshop"]),
    (".png", "Image", "Portable Network Graphics", "Lossless images with transparency support", &["Photos", "GIMP", "Photoshop"]),
    (".gif", "Image", "Graphics Interchange Format", "Animated images and simple graphics", &["Web Browsers", "Photoshop", "GIMP"]),
    (".svg", "Image", "Scalable Vector Graphics", "Vector graphics for web and print", &["Web Browsers", "Inkscape", "Adobe Illustrator"]),
    (".pdf", "Document", "Portable Document Format", "Universal document format", &["Adobe Acrobat", "Web Browsers", "Preview"]),
    (".docx", "Document", "Microsoft Word Document", "Word processing documents", &["Microsoft Word", "Google Docs", "LibreOffice Writer"]),
    (".xlsx", "Document", "Microsoft Excel Spreadsheet", "Spreadsheets and data analysis", &["Microsoft Excel", "Google Sheets", "LibreOffice Calc"]),
    (".pptx", "Document", "Microsoft PowerPoint Presentation", "Slide presentations", &["Microsoft PowerPoint", "Google Slides", "LibreOffice Impress"]),
    (".txt", "Document", "Plain Text File", "Text documents", &["Notepad", "TextEdit", "Vim"]),
    (".zip", "Compressed", "ZIP Archive", "Compressed file archive", &["WinZip", "7-Zip", "Windows Explorer"]),
    (".rar", "Compressed", "RAR Archive", "Compressed file archive", &["WinRAR", "7-Zip", "The Unarchiver"]),
    (".py", "Programming", "Python Source Code", "Python programming language scripts", &["PyCharm", "VS Code", "Sublime Text"]),
    (".java", "Programming", "Java Source Code", "Java programming language files", &["IntelliJ IDEA", "Eclipse", "NetBeans"]),
    (".html", "Programming", "HyperText Markup Language", "Web page structure and content", &["Web Browsers", "VS Code", "Notepad++"]),
    (".css", "Programming", "Cascading Style Sheets", "Web page style and layout", &["VS Code", "Sublime Text", "Web Browsers"]),
    (".json", "Programming", "JavaScript Object Notation", "Data interchange format", &["VS Code", "Notepad++"]),
];

/// The built-in catalog entries in their canonical order.
pub fn builtin_entries() -> Vec<ExtensionInfo> {
    CATALOG
        .iter()
        .map(|&(extension, category, description, common_use, apps)| {
            ExtensionInfo::new(
                extension,
                category,
                description,
                common_use,
                apps.iter().map(|a| a.to_string()).collect(),
            )
        })
        .collect()
}

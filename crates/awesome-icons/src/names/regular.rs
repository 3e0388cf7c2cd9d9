use super::NamedCodepoint;

/// Regular (outlined) style glyphs of the free edition.
pub static REGULAR: &[NamedCodepoint] = &[
    ("address-book", 0xf2b9),
    ("address-card", 0xf2bb),
    ("bell", 0xf0f3),
    ("bell-slash", 0xf1f6),
    ("bookmark", 0xf02e),
    ("building", 0xf1ad),
    ("calendar", 0xf133),
    ("calendar-days", 0xf073),
    ("calendar-plus", 0xf271),
    ("chart-bar", 0xf080),
    ("check-square", 0xf14a),
    ("circle", 0xf111),
    ("circle-check", 0xf058),
    ("circle-question", 0xf059),
    ("circle-user", 0xf2bd),
    ("circle-xmark", 0xf057),
    ("clipboard", 0xf328),
    ("clock", 0xf017),
    ("clone", 0xf24d),
    ("comment", 0xf075),
    ("comments", 0xf086),
    ("compass", 0xf14e),
    ("copy", 0xf0c5),
    ("copyright", 0xf1f9),
    ("credit-card", 0xf09d),
    ("edit", 0xf044),
    ("envelope", 0xf0e0),
    ("envelope-open", 0xf2b6),
    ("eye", 0xf06e),
    ("eye-slash", 0xf070),
    ("file", 0xf15b),
    ("file-code", 0xf1c9),
    ("file-image", 0xf1c5),
    ("file-lines", 0xf15c),
    ("file-pdf", 0xf1c1),
    ("file-zipper", 0xf1c6),
    ("flag", 0xf024),
    ("floppy-disk", 0xf0c7),
    ("folder", 0xf07b),
    ("folder-open", 0xf07c),
    ("gem", 0xf3a5),
    ("hand", 0xf256),
    ("handshake", 0xf2b5),
    ("hard-drive", 0xf0a0),
    ("heart", 0xf004),
    ("hourglass", 0xf254),
    ("image", 0xf03e),
    ("keyboard", 0xf11c),
    ("lemon", 0xf094),
    ("life-ring", 0xf1cd),
    ("lightbulb", 0xf0eb),
    ("map", 0xf279),
    ("moon", 0xf186),
    ("newspaper", 0xf1ea),
    ("paper-plane", 0xf1d8),
    ("paste", 0xf0ea),
    ("pen-to-square", 0xf044),
    ("save", 0xf0c7),
    ("snowflake", 0xf2dc),
    ("square", 0xf0c8),
    ("square-check", 0xf14a),
    ("square-minus", 0xf146),
    ("square-plus", 0xf0fe),
    ("star", 0xf005),
    ("star-half", 0xf089),
    ("sun", 0xf185),
    ("thumbs-down", 0xf165),
    ("thumbs-up", 0xf164),
    ("trash-can", 0xf2ed),
    ("user", 0xf007),
    ("window-maximize", 0xf2d0),
    ("window-minimize", 0xf2d1),
    ("window-restore", 0xf2d2),
];

use super::NamedCodepoint;

/// Solid style glyphs of the free edition.
pub static SOLID: &[NamedCodepoint] = &[
    ("address-book", 0xf2b9),
    ("address-card", 0xf2bb),
    ("align-center", 0xf037),
    ("align-justify", 0xf039),
    ("align-left", 0xf036),
    ("align-right", 0xf038),
    ("anchor", 0xf13d),
    ("angle-down", 0xf107),
    ("angle-left", 0xf104),
    ("angle-right", 0xf105),
    ("angle-up", 0xf106),
    ("archive", 0xf187),
    ("arrow-down", 0xf063),
    ("arrow-left", 0xf060),
    ("arrow-right", 0xf061),
    ("arrow-up", 0xf062),
    ("arrows-rotate", 0xf021),
    ("asterisk", 0xf069),
    ("at", 0xf1fa),
    ("backward", 0xf04a),
    ("ban", 0xf05e),
    ("barcode", 0xf02a),
    ("bars", 0xf0c9),
    ("battery-empty", 0xf244),
    ("battery-full", 0xf240),
    ("battery-half", 0xf242),
    ("beer", 0xf0fc),
    ("beer-mug-empty", 0xf0fc),
    ("bell", 0xf0f3),
    ("bell-slash", 0xf1f6),
    ("bicycle", 0xf206),
    ("binoculars", 0xf1e5),
    ("bold", 0xf032),
    ("bolt", 0xf0e7),
    ("bomb", 0xf1e2),
    ("book", 0xf02d),
    ("bookmark", 0xf02e),
    ("briefcase", 0xf0b1),
    ("bug", 0xf188),
    ("building", 0xf1ad),
    ("bullhorn", 0xf0a1),
    ("bullseye", 0xf140),
    ("bus", 0xf207),
    ("calculator", 0xf1ec),
    ("calendar", 0xf133),
    ("calendar-days", 0xf073),
    ("calendar-plus", 0xf271),
    ("camera", 0xf030),
    ("camera-retro", 0xf083),
    ("car", 0xf1b9),
    ("caret-down", 0xf0d7),
    ("caret-left", 0xf0d9),
    ("caret-right", 0xf0da),
    ("caret-up", 0xf0d8),
    ("cart-shopping", 0xf07a),
    ("chart-area", 0xf1fe),
    ("chart-bar", 0xf080),
    ("chart-line", 0xf201),
    ("chart-pie", 0xf200),
    ("check", 0xf00c),
    ("check-square", 0xf14a),
    ("chevron-down", 0xf078),
    ("chevron-left", 0xf053),
    ("chevron-right", 0xf054),
    ("chevron-up", 0xf077),
    ("circle", 0xf111),
    ("circle-check", 0xf058),
    ("circle-exclamation", 0xf06a),
    ("circle-info", 0xf05a),
    ("circle-notch", 0xf1ce),
    ("circle-question", 0xf059),
    ("circle-user", 0xf2bd),
    ("circle-xmark", 0xf057),
    ("clipboard", 0xf328),
    ("clock", 0xf017),
    ("clone", 0xf24d),
    ("close", 0xf00d),
    ("cloud", 0xf0c2),
    ("code", 0xf121),
    ("code-branch", 0xf126),
    ("coffee", 0xf0f4),
    ("cog", 0xf013),
    ("cogs", 0xf085),
    ("comment", 0xf075),
    ("comments", 0xf086),
    ("compass", 0xf14e),
    ("copy", 0xf0c5),
    ("copyright", 0xf1f9),
    ("credit-card", 0xf09d),
    ("crop", 0xf125),
    ("crosshairs", 0xf05b),
    ("cube", 0xf1b2),
    ("cubes", 0xf1b3),
    ("database", 0xf1c0),
    ("desktop", 0xf108),
    ("download", 0xf019),
    ("edit", 0xf044),
    ("eject", 0xf052),
    ("ellipsis", 0xf141),
    ("ellipsis-vertical", 0xf142),
    ("envelope", 0xf0e0),
    ("envelope-open", 0xf2b6),
    ("eraser", 0xf12d),
    ("exclamation", 0xf12a),
    ("expand", 0xf065),
    ("eye", 0xf06e),
    ("eye-slash", 0xf070),
    ("file", 0xf15b),
    ("file-code", 0xf1c9),
    ("file-image", 0xf1c5),
    ("file-lines", 0xf15c),
    ("file-pdf", 0xf1c1),
    ("file-zipper", 0xf1c6),
    ("filter", 0xf0b0),
    ("fire", 0xf06d),
    ("fire-extinguisher", 0xf134),
    ("flag", 0xf024),
    ("flag-checkered", 0xf11e),
    ("flask", 0xf0c3),
    ("floppy-disk", 0xf0c7),
    ("folder", 0xf07b),
    ("folder-open", 0xf07c),
    ("font", 0xf031),
    ("forward", 0xf04e),
    ("gamepad", 0xf11b),
    ("gavel", 0xf0e3),
    ("gear", 0xf013),
    ("gears", 0xf085),
    ("gem", 0xf3a5),
    ("gift", 0xf06b),
    ("globe", 0xf0ac),
    ("hand", 0xf256),
    ("handshake", 0xf2b5),
    ("hard-drive", 0xf0a0),
    ("hashtag", 0xf292),
    ("headphones", 0xf025),
    ("heart", 0xf004),
    ("heart-pulse", 0xf21e),
    ("home", 0xf015),
    ("hourglass", 0xf254),
    ("house", 0xf015),
    ("image", 0xf03e),
    ("inbox", 0xf01c),
    ("indent", 0xf03c),
    ("industry", 0xf275),
    ("info", 0xf129),
    ("italic", 0xf033),
    ("key", 0xf084),
    ("keyboard", 0xf11c),
    ("laptop", 0xf109),
    ("leaf", 0xf06c),
    ("lemon", 0xf094),
    ("life-ring", 0xf1cd),
    ("lightbulb", 0xf0eb),
    ("link", 0xf0c1),
    ("link-slash", 0xf127),
    ("list", 0xf03a),
    ("list-check", 0xf0ae),
    ("list-ol", 0xf0cb),
    ("list-ul", 0xf0ca),
    ("location-arrow", 0xf124),
    ("lock", 0xf023),
    ("magnet", 0xf076),
    ("magnifying-glass", 0xf002),
    ("magnifying-glass-minus", 0xf010),
    ("magnifying-glass-plus", 0xf00e),
    ("map", 0xf279),
    ("map-pin", 0xf276),
    ("microchip", 0xf2db),
    ("microphone", 0xf130),
    ("microphone-slash", 0xf131),
    ("minus", 0xf068),
    ("mobile", 0xf10b),
    ("moon", 0xf186),
    ("motorcycle", 0xf21c),
    ("mug-saucer", 0xf0f4),
    ("music", 0xf001),
    ("newspaper", 0xf1ea),
    ("paper-plane", 0xf1d8),
    ("paperclip", 0xf0c6),
    ("paragraph", 0xf1dd),
    ("paste", 0xf0ea),
    ("pause", 0xf04c),
    ("pen", 0xf304),
    ("pen-to-square", 0xf044),
    ("pencil", 0xf303),
    ("percent", 0xf295),
    ("phone", 0xf095),
    ("plane", 0xf072),
    ("play", 0xf04b),
    ("plug", 0xf1e6),
    ("plus", 0xf067),
    ("power-off", 0xf011),
    ("print", 0xf02f),
    ("puzzle-piece", 0xf12e),
    ("qrcode", 0xf029),
    ("question", 0xf128),
    ("quote-left", 0xf10d),
    ("quote-right", 0xf10e),
    ("refresh", 0xf021),
    ("reply", 0xf112),
    ("reply-all", 0xf122),
    ("retweet", 0xf079),
    ("road", 0xf018),
    ("rocket", 0xf135),
    ("rotate", 0xf2f1),
    ("rotate-left", 0xf2ea),
    ("rotate-right", 0xf2f9),
    ("save", 0xf0c7),
    ("scissors", 0xf0c4),
    ("search", 0xf002),
    ("server", 0xf233),
    ("share", 0xf064),
    ("share-nodes", 0xf1e0),
    ("shield", 0xf132),
    ("ship", 0xf21a),
    ("shuffle", 0xf074),
    ("signal", 0xf012),
    ("sitemap", 0xf0e8),
    ("sliders", 0xf1de),
    ("snowflake", 0xf2dc),
    ("sort", 0xf0dc),
    ("spinner", 0xf110),
    ("square", 0xf0c8),
    ("square-check", 0xf14a),
    ("square-minus", 0xf146),
    ("square-plus", 0xf0fe),
    ("star", 0xf005),
    ("star-half", 0xf089),
    ("stop", 0xf04d),
    ("stopwatch", 0xf2f2),
    ("strikethrough", 0xf0cc),
    ("subscript", 0xf12c),
    ("suitcase", 0xf0f2),
    ("sun", 0xf185),
    ("superscript", 0xf12b),
    ("table", 0xf0ce),
    ("tablet", 0xf10a),
    ("tag", 0xf02b),
    ("tags", 0xf02c),
    ("terminal", 0xf120),
    ("thumbs-down", 0xf165),
    ("thumbs-up", 0xf164),
    ("thumbtack", 0xf08d),
    ("ticket", 0xf145),
    ("times", 0xf00d),
    ("toggle-off", 0xf204),
    ("toggle-on", 0xf205),
    ("trash", 0xf1f8),
    ("trash-can", 0xf2ed),
    ("tree", 0xf1bb),
    ("triangle-exclamation", 0xf071),
    ("trophy", 0xf091),
    ("truck", 0xf0d1),
    ("tv", 0xf26c),
    ("umbrella", 0xf0e9),
    ("underline", 0xf0cd),
    ("unlock", 0xf09c),
    ("upload", 0xf093),
    ("user", 0xf007),
    ("user-plus", 0xf234),
    ("user-secret", 0xf21b),
    ("user-xmark", 0xf235),
    ("users", 0xf0c0),
    ("video", 0xf03d),
    ("volume-high", 0xf028),
    ("volume-low", 0xf027),
    ("volume-off", 0xf026),
    ("wifi", 0xf1eb),
    ("window-maximize", 0xf2d0),
    ("window-minimize", 0xf2d1),
    ("window-restore", 0xf2d2),
    ("wrench", 0xf0ad),
    ("xmark", 0xf00d),
];

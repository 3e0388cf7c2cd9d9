use super::NamedCodepoint;

/// Brand logos.
pub static BRANDS: &[NamedCodepoint] = &[
    ("android", 0xf17b),
    ("apple", 0xf179),
    ("aws", 0xf375),
    ("bitbucket", 0xf171),
    ("bitcoin", 0xf379),
    ("bluetooth", 0xf293),
    ("chrome", 0xf268),
    ("css3", 0xf13c),
    ("debian", 0xe60b),
    ("discord", 0xf392),
    ("docker", 0xf395),
    ("dropbox", 0xf16b),
    ("edge", 0xf282),
    ("ethereum", 0xf42e),
    ("facebook", 0xf09a),
    ("fedora", 0xf798),
    ("firefox", 0xf269),
    ("font-awesome", 0xf2b4),
    ("git-alt", 0xf841),
    ("github", 0xf09b),
    ("github-alt", 0xf113),
    ("gitlab", 0xf296),
    ("google", 0xf1a0),
    ("html5", 0xf13b),
    ("instagram", 0xf16d),
    ("java", 0xf4e4),
    ("js", 0xf3b8),
    ("linkedin", 0xf08c),
    ("linux", 0xf17c),
    ("mastodon", 0xf4f6),
    ("microsoft", 0xf3ca),
    ("node-js", 0xf3d3),
    ("npm", 0xf3d4),
    ("opera", 0xf26a),
    ("paypal", 0xf1ed),
    ("python", 0xf3e2),
    ("reddit", 0xf1a1),
    ("rust", 0xe07a),
    ("safari", 0xf267),
    ("slack", 0xf198),
    ("spotify", 0xf1bc),
    ("stack-overflow", 0xf16c),
    ("steam", 0xf1b6),
    ("telegram", 0xf2c6),
    ("twitch", 0xf1e8),
    ("twitter", 0xf099),
    ("ubuntu", 0xf7df),
    ("whatsapp", 0xf232),
    ("windows", 0xf17a),
    ("wordpress", 0xf19a),
    ("x-twitter", 0xe61b),
    ("youtube", 0xf167),
];

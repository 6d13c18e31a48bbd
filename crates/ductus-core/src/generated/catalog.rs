// Built-in stroke and character tables. Data only; see `strokes.rs` / `characters.rs`.

/// `(code, name, weight)`
pub(crate) const STROKES: &[(char, &str, f64)] = &[
    (' ', "none", 0.0),
    ('|', "vertical", 0.5),
    ('o', "round", 1.25),
    ('/', "up-slant", 2.0),
    ('\\', "down-slant", 2.0),
    ('*', "special", 3.0),
];

/// `(glyph, before, after, entity_name, numeric_entity)`
pub(crate) const CHARACTERS: &[(char, char, char, Option<&str>, Option<&str>)] = &[
    // ASCII
    (' ', ' ', ' ', None, None),
    ('!', '|', '|', None, None),
    ('"', '|', '|', None, None),
    ('#', '*', '*', None, None),
    ('$', 'o', 'o', None, None),
    ('%', '*', '*', None, None),
    ('&', 'o', '*', None, None),
    ('\'', '|', '|', None, None),
    ('(', 'o', '|', None, None),
    (')', '|', 'o', None, None),
    ('*', '*', '*', None, None),
    ('+', '*', '*', None, None),
    (',', '*', '*', None, None),
    ('-', '*', '*', None, None),
    ('.', '*', '*', None, None),
    ('/', '/', '\\', None, None),
    ('0', 'o', 'o', None, None),
    ('1', '*', '|', None, None),
    ('2', '*', '*', None, None),
    ('3', '*', 'o', None, None),
    ('4', '*', '|', None, None),
    ('5', '|', 'o', None, None),
    ('6', 'o', 'o', None, None),
    ('7', '*', '\\', None, None),
    ('8', 'o', 'o', None, None),
    ('9', 'o', 'o', None, None),
    (':', '*', '*', None, None),
    (';', '*', '*', None, None),
    ('<', '*', '*', None, None),
    ('=', '*', '*', None, None),
    ('>', '*', '*', None, None),
    ('?', '*', '*', None, None),
    ('@', 'o', 'o', None, None),
    ('A', '/', '/', None, None),
    ('B', '|', 'o', None, None),
    ('C', 'o', '*', None, None),
    ('D', '|', 'o', None, None),
    ('E', '|', '*', None, None),
    ('F', '|', '*', None, None),
    ('G', 'o', 'o', None, None),
    ('H', '|', '|', None, None),
    ('I', '|', '|', None, None),
    ('J', '/', '|', None, None),
    ('K', '|', '*', None, None),
    ('L', '|', '/', None, None),
    ('M', '|', '|', None, None),
    ('N', '|', '|', None, None),
    ('O', 'o', 'o', None, None),
    ('P', '|', '\\', None, None),
    ('Q', 'o', 'o', None, None),
    ('R', '|', '*', None, None),
    ('S', 'o', 'o', None, None),
    ('T', '\\', '\\', None, None),
    ('U', '|', '|', None, None),
    ('V', '\\', '\\', None, None),
    ('W', '\\', '\\', None, None),
    ('X', '*', '*', None, None),
    ('Y', '\\', '\\', None, None),
    ('Z', '*', '*', None, None),
    ('[', '|', '|', None, None),
    ('\\', '\\', '/', None, None),
    (']', '|', '|', None, None),
    ('^', '/', '/', None, None),
    ('_', '*', '*', None, None),
    ('`', '*', '*', None, None),
    ('a', 'o', '|', None, None),
    ('b', '|', 'o', None, None),
    ('c', 'o', '*', None, None),
    ('d', 'o', '|', None, None),
    ('e', 'o', '*', None, None),
    ('f', '|', '\\', None, None),
    ('g', 'o', '|', None, None),
    ('h', '|', '|', None, None),
    ('i', '|', '|', None, None),
    ('j', '*', '|', None, None),
    ('k', '|', '*', None, None),
    ('l', '|', '|', None, None),
    ('m', '|', '|', None, None),
    ('n', '|', '|', None, None),
    ('o', 'o', 'o', None, None),
    ('p', '|', 'o', None, None),
    ('q', 'o', '|', None, None),
    ('r', '|', '\\', None, None),
    ('s', 'o', 'o', None, None),
    ('t', '|', '*', None, None),
    ('u', '|', '|', None, None),
    ('v', '\\', '\\', None, None),
    ('w', '\\', '\\', None, None),
    ('x', '*', '*', None, None),
    ('y', '\\', '\\', None, None),
    ('z', '*', '*', None, None),
    ('{', '*', '*', None, None),
    ('|', '|', '|', None, None),
    ('}', '*', '*', None, None),
    ('~', '*', '*', None, None),
    // Named escapes
    ('&', 'o', '*', Some("&amp;"), Some("&#38;")),
    ('<', '*', '*', Some("&lt;"), Some("&#60;")),
    ('>', '*', '*', Some("&gt;"), Some("&#62;")),
    ('"', '|', '|', Some("&quot;"), Some("&#34;")),
    ('\'', '|', '|', Some("&apos;"), Some("&#39;")),
    ('\u{a0}', ' ', ' ', Some("&nbsp;"), Some("&#160;")),
    ('¡', '|', '|', Some("&iexcl;"), Some("&#161;")),
    ('¢', 'o', '*', Some("&cent;"), Some("&#162;")),
    ('£', '|', '*', Some("&pound;"), Some("&#163;")),
    ('¤', '*', '*', Some("&curren;"), Some("&#164;")),
    ('¥', '\\', '\\', Some("&yen;"), Some("&#165;")),
    ('¦', '|', '|', Some("&brvbar;"), Some("&#166;")),
    ('§', 'o', 'o', Some("&sect;"), Some("&#167;")),
    ('¨', '*', '*', Some("&uml;"), Some("&#168;")),
    ('©', 'o', 'o', Some("&copy;"), Some("&#169;")),
    ('ª', 'o', '|', Some("&ordf;"), Some("&#170;")),
    ('«', '*', '*', Some("&laquo;"), Some("&#171;")),
    ('¬', '*', '*', Some("&not;"), Some("&#172;")),
    ('\u{ad}', '*', '*', Some("&shy;"), Some("&#173;")),
    ('®', 'o', 'o', Some("&reg;"), Some("&#174;")),
    ('¯', '*', '*', Some("&macr;"), Some("&#175;")),
    ('°', '\\', '\\', Some("&deg;"), Some("&#176;")),
    ('±', '*', '*', Some("&plusmn;"), Some("&#177;")),
    ('²', '\\', '\\', Some("&sup2;"), Some("&#178;")),
    ('³', '\\', '\\', Some("&sup3;"), Some("&#179;")),
    ('´', '*', '*', Some("&acute;"), Some("&#180;")),
    ('µ', '|', '|', Some("&micro;"), Some("&#181;")),
    ('¶', 'o', '|', Some("&para;"), Some("&#182;")),
    ('·', '*', '*', Some("&middot;"), Some("&#183;")),
    ('¸', '*', '*', Some("&cedil;"), Some("&#184;")),
    ('¹', '\\', '\\', Some("&sup1;"), Some("&#185;")),
    ('º', 'o', 'o', Some("&ordm;"), Some("&#186;")),
    ('»', '*', '*', Some("&raquo;"), Some("&#187;")),
    ('¼', '*', '*', Some("&frac14;"), Some("&#188;")),
    ('½', '*', '*', Some("&frac12;"), Some("&#189;")),
    ('¾', '*', '*', Some("&frac34;"), Some("&#190;")),
    ('¿', '*', '*', Some("&iquest;"), Some("&#191;")),
    ('×', '*', '*', Some("&times;"), Some("&#215;")),
    ('÷', '*', '*', Some("&divide;"), Some("&#247;")),
    // Latin-1 letters
    ('À', '/', '/', Some("&Agrave;"), Some("&#192;")),
    ('Á', '/', '/', Some("&Aacute;"), Some("&#193;")),
    ('Â', '/', '/', Some("&Acirc;"), Some("&#194;")),
    ('Ã', '/', '/', Some("&Atilde;"), Some("&#195;")),
    ('Ä', '/', '/', Some("&Auml;"), Some("&#196;")),
    ('Å', '/', '/', Some("&Aring;"), Some("&#197;")),
    ('Æ', '/', '*', Some("&AElig;"), Some("&#198;")),
    ('Ç', 'o', '*', Some("&Ccedil;"), Some("&#199;")),
    ('È', '|', '*', Some("&Egrave;"), Some("&#200;")),
    ('É', '|', '*', Some("&Eacute;"), Some("&#201;")),
    ('Ê', '|', '*', Some("&Ecirc;"), Some("&#202;")),
    ('Ë', '|', '*', Some("&Euml;"), Some("&#203;")),
    ('Ì', '|', '|', Some("&Igrave;"), Some("&#204;")),
    ('Í', '|', '|', Some("&Iacute;"), Some("&#205;")),
    ('Î', '|', '|', Some("&Icirc;"), Some("&#206;")),
    ('Ï', '|', '|', Some("&Iuml;"), Some("&#207;")),
    ('Ð', '|', 'o', Some("&ETH;"), Some("&#208;")),
    ('Ñ', '|', '|', Some("&Ntilde;"), Some("&#209;")),
    ('Ò', 'o', 'o', Some("&Ograve;"), Some("&#210;")),
    ('Ó', 'o', 'o', Some("&Oacute;"), Some("&#211;")),
    ('Ô', 'o', 'o', Some("&Ocirc;"), Some("&#212;")),
    ('Õ', 'o', 'o', Some("&Otilde;"), Some("&#213;")),
    ('Ö', 'o', 'o', Some("&Ouml;"), Some("&#214;")),
    ('Ø', 'o', 'o', Some("&Oslash;"), Some("&#216;")),
    ('Ù', '|', '|', Some("&Ugrave;"), Some("&#217;")),
    ('Ú', '|', '|', Some("&Uacute;"), Some("&#218;")),
    ('Û', '|', '|', Some("&Ucirc;"), Some("&#219;")),
    ('Ü', '|', '|', Some("&Uuml;"), Some("&#220;")),
    ('Ý', '\\', '\\', Some("&Yacute;"), Some("&#221;")),
    ('Þ', '|', 'o', Some("&THORN;"), Some("&#222;")),
    ('ß', '|', 'o', Some("&szlig;"), Some("&#223;")),
    ('à', 'o', '|', Some("&agrave;"), Some("&#224;")),
    ('á', 'o', '|', Some("&aacute;"), Some("&#225;")),
    ('â', 'o', '|', Some("&acirc;"), Some("&#226;")),
    ('ã', 'o', '|', Some("&atilde;"), Some("&#227;")),
    ('ä', 'o', '|', Some("&auml;"), Some("&#228;")),
    ('å', 'o', '|', Some("&aring;"), Some("&#229;")),
    ('æ', 'o', '*', Some("&aelig;"), Some("&#230;")),
    ('ç', 'o', '*', Some("&ccedil;"), Some("&#231;")),
    ('è', 'o', '*', Some("&egrave;"), Some("&#232;")),
    ('é', 'o', '*', Some("&eacute;"), Some("&#233;")),
    ('ê', 'o', '*', Some("&ecirc;"), Some("&#234;")),
    ('ë', 'o', '*', Some("&euml;"), Some("&#235;")),
    ('ì', '|', '|', Some("&igrave;"), Some("&#236;")),
    ('í', '|', '|', Some("&iacute;"), Some("&#237;")),
    ('î', '|', '|', Some("&icirc;"), Some("&#238;")),
    ('ï', '|', '|', Some("&iuml;"), Some("&#239;")),
    ('ð', 'o', 'o', Some("&eth;"), Some("&#240;")),
    ('ñ', '|', '|', Some("&ntilde;"), Some("&#241;")),
    ('ò', 'o', 'o', Some("&ograve;"), Some("&#242;")),
    ('ó', 'o', 'o', Some("&oacute;"), Some("&#243;")),
    ('ô', 'o', 'o', Some("&ocirc;"), Some("&#244;")),
    ('õ', 'o', 'o', Some("&otilde;"), Some("&#245;")),
    ('ö', 'o', 'o', Some("&ouml;"), Some("&#246;")),
    ('ø', 'o', 'o', Some("&oslash;"), Some("&#248;")),
    ('ù', '|', '|', Some("&ugrave;"), Some("&#249;")),
    ('ú', '|', '|', Some("&uacute;"), Some("&#250;")),
    ('û', '|', '|', Some("&ucirc;"), Some("&#251;")),
    ('ü', '|', '|', Some("&uuml;"), Some("&#252;")),
    ('ý', '\\', '\\', Some("&yacute;"), Some("&#253;")),
    ('þ', '|', 'o', Some("&thorn;"), Some("&#254;")),
    ('ÿ', '\\', '\\', Some("&yuml;"), Some("&#255;")),
    // Latin extended and typographic punctuation
    ('Œ', 'o', 'o', Some("&OElig;"), Some("&#338;")),
    ('œ', 'o', '*', Some("&oelig;"), Some("&#339;")),
    ('Š', 'o', 'o', Some("&Scaron;"), Some("&#352;")),
    ('š', 'o', 'o', Some("&scaron;"), Some("&#353;")),
    ('Ÿ', '\\', '\\', Some("&Yuml;"), Some("&#376;")),
    ('ƒ', '|', '\\', Some("&fnof;"), Some("&#402;")),
    ('ˆ', '/', '/', Some("&circ;"), Some("&#710;")),
    ('˜', '*', '*', Some("&tilde;"), Some("&#732;")),
    ('\u{2002}', ' ', ' ', Some("&ensp;"), Some("&#8194;")),
    ('\u{2003}', ' ', ' ', Some("&emsp;"), Some("&#8195;")),
    ('\u{2009}', ' ', ' ', Some("&thinsp;"), Some("&#8201;")),
    ('\u{2013}', '*', '*', Some("&ndash;"), Some("&#8211;")),
    ('\u{2014}', '*', '*', Some("&mdash;"), Some("&#8212;")),
    ('\u{2018}', '\\', '\\', Some("&lsquo;"), Some("&#8216;")),
    ('\u{2019}', '\\', '\\', Some("&rsquo;"), Some("&#8217;")),
    ('\u{201a}', '*', '*', Some("&sbquo;"), Some("&#8218;")),
    ('\u{201c}', '\\', '\\', Some("&ldquo;"), Some("&#8220;")),
    ('\u{201d}', '\\', '\\', Some("&rdquo;"), Some("&#8221;")),
    ('\u{201e}', '*', '*', Some("&bdquo;"), Some("&#8222;")),
    ('\u{2020}', '|', '|', Some("&dagger;"), Some("&#8224;")),
    ('\u{2021}', '|', '|', Some("&Dagger;"), Some("&#8225;")),
    ('\u{2022}', '*', '*', Some("&bull;"), Some("&#8226;")),
    ('\u{2026}', '*', '*', Some("&hellip;"), Some("&#8230;")),
    ('\u{2030}', '*', '*', Some("&permil;"), Some("&#8240;")),
    ('\u{2032}', '\\', '\\', Some("&prime;"), Some("&#8242;")),
    ('\u{2033}', '\\', '\\', Some("&Prime;"), Some("&#8243;")),
    ('\u{2039}', '*', '*', Some("&lsaquo;"), Some("&#8249;")),
    ('\u{203a}', '*', '*', Some("&rsaquo;"), Some("&#8250;")),
    ('\u{20ac}', 'o', '*', Some("&euro;"), Some("&#8364;")),
    ('\u{2122}', '\\', '\\', Some("&trade;"), Some("&#8482;")),
];

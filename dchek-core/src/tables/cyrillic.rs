//! Cyrillic homoglyph catalog
//!
//! Stored as three runs of text: the modern alphabet (with a few historical and
//! accented letters), the extended letters used by minority languages, and
//! archaic or Church Slavonic forms. Many entries are a base letter followed by
//! one or more combining marks; [`cyrillic_entries`](super::cyrillic_entries)
//! splits the runs into individual entries.

/// Modern Cyrillic alphabet and accented forms
pub static CYRILLIC_BASIC: &str = "АБВГҐДЂЃЕЀЕ̄Е̂ЁЄЖЗЅИИІЇꙆЍИ̂ӢЙЈКЛЉМНЊОО̀О̂ŌӦПРСС́ТЋЌУУ̀У̂ӮЎӰФХЦЧЏШЩꙎЪЫЬѢЭЮЮ̀ЯЯ̀";

/// Letters of non-Russian Cyrillic orthographies
pub static CYRILLIC_EXTENDED: &str = "ӐА̊А̃Ӓ̄ӔӘӘ́Ә̃ӚВ̌ԜГ̑Г̇Г̣Г̌Г̂Г̆Г̈г̊ҔҒӺҒ̌ғ̊ӶД́Д̌Д̈Д̣Д̆ӖЕ̃Ё̄Є̈ԐԐ̈ҖӜӁЖ̣ҘӞЗ̌З̣З̆ӠИ̃ӤҊҚӃҠҞҜК̣к̊қ̊ԚᴫЛ́ӅԮԒЛ̈ӍᵸН́ӉҢԨӇҤО̆О̃Ӧ̄ӨӨ̄Ө́Ө̆ӪԤП̈Р̌ҎР̌С̌ҪС̣С̱Т́Т̈Т̌Т̇Т̣ҬУ̃ӲУ̊Ӱ̄ҰҮҮ́Х̣Х̱Х̮Х̑Х̌ҲӼх̊Ӿӿ̊ҺҺ̈ԦЦ̌Ц̈ҴҶҶ̣ӴӋҸЧ̇Ч̣ҼҾШ̣ꚜЫ̆Ы̄ӸꚝҌҨЭ̆Э̄Э̇ӬӬ́Ӭ̄Ю̆Ю̈Ю̄Я̆Я̄Я̈Ӏʼˮ";

/// Archaic, Church Slavonic and transliteration forms
pub static CYRILLIC_HISTORIC: &str = "А̨Б̀Б̣Б̱В̀Г̀Г̧Г̄Г̓Г̆Ҕ̀Ҕ̆ԀД̓Д̀Д̨ԂꚀꙢЕ̇Е̨Ж̀Ж̑ꙂꙄЏ̆ꚄꚄ̆ꙀЗ̀З̑ԄԆꚈԪꚂꚔІ̂І̣І̨Ј̵Ј̃ꙈК̓К̀К̆Ӄ̆К̑К̇К̈К̄ԞЛ̀ԠꙤԈЛ̑Л̇ԔМ̀М̃ꙦН̀Н̄Н̧Н̃ԊԢН̡ѺꙨꙪꙬꙮꚘꚚП̓П̀П́ҦП̧П̑ҀԚ̆Р́Р̀Р̃ԖС̀С̈ԌҪ̓Т̓Т̀ԎТ̑ꚊТ̧ꚌꚌ̆ОУꙊУ̇У̨ꙋ́Ф̑Ф̓Х́Х̀Х̆Х̇Х̧Х̾Х̓һ̱ѠꙌѼѾꙠЦ̀Ц́Ц̓ꚎꚎ̆ꚐЧ́Ч̀Ч̆Ч̑Ч̓ԬꚒꚆꚆ̆Ҽ̆Ш̀Ш̆Ш̑Щ̆ꚖꚖ̆Ъ̄Ъ̈Ъ̈̄ꙐЫ̂Ы̃Ѣ́Ѣ̈Ѣ̆ꙒЭ̨Э̂ꙔЮ̂ꙖЯ̈Я̂Я̨ԘѤѦꙘѪꙚѨꙜѬѮѰѲѴѶꙞ";

/// All catalog runs in lookup order
pub static CYRILLIC_RUNS: [&str; 3] = [CYRILLIC_BASIC, CYRILLIC_EXTENDED, CYRILLIC_HISTORIC];

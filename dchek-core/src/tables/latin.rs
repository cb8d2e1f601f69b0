//! Extended-Latin letter variants grouped by base letter
//!
//! Each group lists precomposed accented forms, ligatures, IPA and small-capital
//! forms, and fullwidth forms that read as the base letter. Some entries are
//! base letter plus combining mark sequences, so groups are stored as strings and
//! membership is decided per code point over the union of all groups.

/// Variant groups, one per base letter `A` through `Z`
pub static LATIN_VARIANT_GROUPS: [(char, &str); 26] = [
    ('A', "ÁÀÂǍĂÃẢȦẠÄÅḀĀĄᶏȺȀẤẦẪẨẬẮẰẴẲẶǺǠǞȂⱭᴬⱯɐɒＡÆᴁᴭᵆǼǢᴂ"),
    ('B', "ḂḃḄḅḆḇɃƀƁɓƂƃᵬᶀʙＢȸ"),
    ('C', "ĆćĈĉČčĊċC̄c̄ÇçḈḉȻȼƇƈɕᴄＣ"),
    ('D', "ĎďḊḋḐḑD̦d̦ḌḍḒḓḎḏĐđÐd̦ƉɖƊɗƋƌᵭᶁᶑȡᴅＤÞþȸDZDzdzǱǲǳDŽDždžǄǅǆ"),
    ('E', "ÉèÊḘḙĚěĔĕẼẽḚḛẺẻĖėËëĒēȨȩĘęᶒɆɇȄȅẾếỀềỄễỂểḜḝḖḗḔḕȆȇẸẹỆệⱸᴇƏəƐɛＥᴂᴔÆᴁᴭᵆǼǢŒᵫ"),
    ('F', "ḞḟƑƒᵮᶂꜰＦﬀﬃﬄﬁﬂ"),
    ('G', "ǴǵĞğĜĝǦǧĠġĢģḠḡǤǥƓɠᶃɢȜȝＧŊŋɢɢ̆"),
    ('H', "ĤĥȞȟḦḧḢḣḨḩḤḥḪḫH̱ẖĦħⱧⱨɦʰʜＨh̃ɧ"),
    ('I', "ÍìĬĭÎîǏǐÏïḮḯĨĩĮįĪīỈỉȈȉȊȋỊịḬḭƗɨᵻᶖİiIıɪƖɩＩﬁIJijĲĳ"),
    ('J', "ĴĵɈɉJ̌ǰȷʝɟʄᴊＪIJijĲĳLJLjljǇǈǉNJNjnjǊǋǌʲj̃"),
    ('K', "ḰḱǨǩĶķḲḳḴḵƘƙⱩⱪᶄᶄꝀꝁᴋＫ"),
    ('L', "ĹĺĽľĻļḶḷḸḹḼḽḺḻŁłĿŀȽƚⱠⱡⱢɫɬᶅɭȴʟＬﬂLJLjljǇǈǉ"),
    ('M', "ḾḿṀṁṂṃᵯᶆⱮɱᴍＭ"),
    ('N', "ŃǹŇňÑñṄṅŅņṆṇṊṋṈṉN̈n̈ƝɲȠƞᵰᶇɳȵɴＮŊŋNJNjnjǊǋǌ"),
    ('O', "ÓòŎŏÔôỐốỒồỖỗỔǒÖöȪȫŐőÕõṌṍṎṏȬȭȮȯȰȱØøǾǿǪǫǬǭŌōṒṓṐṑỎỏȌȍȎȏƠơỚớỜờỠỡỞởỢợỌọỘộƟɵƆɔȢȣⱺᴏＯŒœᴔ"),
    ('P', "ṔṕṖṗⱣᵽƤƥP̃p̃ᵱᶈᴘǷƿＰȹ"),
    ('Q', "ɊɋƢƣʠＱｑȹ"),
    ('R', "ŔŕŘřṘṙŖŗȐȑȒȓṚṛṜṝṞṟɌɍⱤɽꝚꝛᵲᶉɼɾᵳʀＲɹʁ"),
    ('S', "ſẞßŚśṤṥŜŝŠšṦṧṠṡẛŞşṢṣṨṩȘșS̩s̩ᵴᶊʂȿꜱƩʃＳ"),
    ('T', "ŤťṪṫŢţṬṭȚțṰṱṮṯŦŧȾⱦƬƭƮʈT̈ẗᵵƫȶᶙᴛＴ"),
    ('U', "ÚùŬŭÛûǓǔŮůÜüǗǘǛǜǙǚǕǖŰűŨũṸṹŲųŪūṺṻỦủȔȕȖȗƯưỨứỪừỮữỬửỰựỤụṲṳṶṷṴṵɄʉƱʊȢȣᵾᶙᴜＵᵫɯ"),
    ('V', "ṼṽṾṿƲʋᶌᶌⱱⱴᴠɅʍＶ"),
    ('W', "ẂẃẀẁŴŵẄẅẆẇẈẉW̊ẘⱲⱳᴡＷｗʷʍw̃"),
    ('X', "ẌẍẊẋᶍＸｘ"),
    ('Y', "ÝýỲỳŶŷẙŸÿỸỹẎẏȲȳỶỷỴỵɎɏƳƴʏＹｙ"),
    ('Z', "ŹźẐẑŽžŻżẒẓẔẕƵƶȤȥⱫⱬᵶᶎʐʑɀᴢƷʒƸƹＺｚDZDzdzǱǲǳDŽDždžǄǅǆ"),
];

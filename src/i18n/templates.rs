/// Hand-written Hinglish explanations for the most common classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TranslatedTemplate {
    pub explanation: &'static str,
    pub fix_suggestion: &'static str,
}

/// Word and phrase substitutions used by the Hinglish stub, in authoring order.
/// Identity pairs keep technical terms in English.
pub const HINGLISH_REPLACEMENTS: &[(&str, &str)] = &[
    ("Python", "Python"),
    ("code", "code"),
    ("function", "function"),
    ("variable", "variable"),
    ("file", "file"),
    ("error", "error"),
    ("exception", "exception"),
    ("You tried", "Aapne koshish ki"),
    ("You wrote", "Aapne likha"),
    ("You pressed", "Aapne press kiya"),
    ("tried to", "koshish ki"),
    ("doesn't exist", "exist nahi karta"),
    ("doesn't follow", "follow nahi karta"),
    ("couldn't find", "nahi mil saka"),
    ("can't find", "nahi mil sakta"),
    ("doesn't have", "ke paas nahi hai"),
    ("the language rules", "language ke rules"),
    ("the wrong type", "galat type"),
    ("a dictionary", "ek dictionary"),
    ("a list", "ek list"),
    ("a file", "ek file"),
    ("a folder", "ek folder"),
    ("the program", "program"),
    ("the computer", "computer"),
    ("wrong", "galat"),
    ("correct", "sahi"),
    ("invalid", "invalid"),
    ("missing", "missing"),
    ("too big", "bahut bada"),
    ("too long", "bahut lamba"),
    ("It's like", "Yeh aisa hai jaise"),
    ("This is", "Yeh hai"),
    ("Something went wrong", "Kuch galat ho gaya"),
    ("Check", "Check karein"),
    ("Make sure", "Pakka karein"),
    ("Use", "Use karein"),
    ("Install", "Install karein"),
];

pub const HINGLISH_TEMPLATES: &[(&str, TranslatedTemplate)] = &[
    (
        "SyntaxError",
        TranslatedTemplate {
            explanation: "Aapne Python code likha jo language ke rules follow nahi karta. Python samajh nahi saka ki aapne kya type kiya. Yeh aisa hai jaise galat grammar ke saath sentence likhna 📝",
            fix_suggestion: "Missing colons (:), unmatched parentheses/brackets check karein, ya keywords jaise 'if', 'for', 'def' mein typos dekhe",
        },
    ),
    (
        "NameError",
        TranslatedTemplate {
            explanation: "Aapne ek variable ya function name use karne ki koshish ki jo abhi tak exist nahi karta. Python ko samajh nahi aa raha aap kya bol rahe ho. Yeh aisa hai jaise kisi ko bulana jo kamre mein nahi hai 🤷",
            fix_suggestion: "Spelling check karein, pakka karein ki aapne pehle variable define kiya hai, ya module import karein jisme yeh hai",
        },
    ),
    (
        "ZeroDivisionError",
        TranslatedTemplate {
            explanation: "Aapne ek number ko zero se divide karne ki koshish ki, jo math mein impossible hai. Zero se division universe ke math rules ko tod deta hai. Python infinity calculate nahi kar sakta ➗",
            fix_suggestion: "Divide karne se pehle check karein ki divisor zero toh nahi hai, ya zero values handle karne ke liye condition add karein",
        },
    ),
    (
        "FileNotFoundError",
        TranslatedTemplate {
            explanation: "Python ko woh file nahi mili jise aap open ya use karne ki koshish kar rahe ho. File aapke diye gaye path par exist nahi karti. Yeh aisa hai jaise ek book dhundhna jo shelf par nahi hai 📁",
            fix_suggestion: "File path ki spelling check karein, verify karein ki file exist karti hai, ya file create karein agar honi chahiye",
        },
    ),
    (
        "TypeError",
        TranslatedTemplate {
            explanation: "Aapne galat type ke data ke saath kuch karne ki koshish ki. Jaise ek number ko ek word ke saath add karna - yeh mix nahi hote. Python ko compatible types chahiye saath kaam karne ke liye 🔢➕📝",
            fix_suggestion: "Data ko sahi type mein convert karein (e.g., int(), str(), list()), ya check karein ki aap sahi operation use kar rahe ho",
        },
    ),
    (
        "ValueError",
        TranslatedTemplate {
            explanation: "Data type toh sahi hai par actual value sense nahi bana rahi. Jaise 'hello' word ko number mein convert karne ki koshish karna. Format ya content galat hai 🎯",
            fix_suggestion: "Check karein ki input value valid hai jo aap karne ki koshish kar rahe ho. Bad values handle karne ke liye validation ya try/except add karein",
        },
    ),
    (
        "KeyError",
        TranslatedTemplate {
            explanation: "Aapne ek dictionary se ek key use karke value lene ki koshish ki jo exist nahi karti. Yeh aisa hai jaise dictionary mein ek word dhundhna jo hai hi nahi. Aapne jo key maangi woh missing hai 🔑",
            fix_suggestion: "dict[key] ke bajaye dict.get(key, default) use karein, ya 'key in dict' se pehle check karein ki key exist karti hai",
        },
    ),
    (
        "IndexError",
        TranslatedTemplate {
            explanation: "Aapne list mein ek position access karne ki koshish ki jo exist nahi karta. Jaise 10th item lena jab sirf 5 items hain. Index range se bahar hai 📊",
            fix_suggestion: "Access karne se pehle len() se length check karein, ya end se count karne ke liye negative indices use karein",
        },
    ),
    (
        "ImportError",
        TranslatedTemplate {
            explanation: "Python aapke request kiye gaye module ko import nahi kar saka. Package shayad installed nahi hai ya naam galat hai. Import fail ho gaya 📦",
            fix_suggestion: "Package ko pip install se install karein, spelling check karein, ya verify karein ki module aapke environment mein exist karta hai",
        },
    ),
    (
        "AttributeError",
        TranslatedTemplate {
            explanation: "Aapne ek property ya method access karne ki koshish ki jo object par exist nahi karta. Jis cheez ke saath aap kaam kar rahe ho uske paas woh feature nahi hai. Yeh aisa hai jaise car ka door kholna jo hai hi nahi 🚗",
            fix_suggestion: "dir(object) use karke sahi attribute name check karein, ya verify karein ki object type wahi hai jo aap expect kar rahe ho",
        },
    ),
];

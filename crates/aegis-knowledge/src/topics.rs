//! Static topic and stop-word tables.
//!
//! The topic table is the chatbot's entire "knowledge": each entry maps a
//! normalized keyword to one or more interchangeable response variants.

/// Topic entries: (keyword, response variants). Every topic has at least
/// one non-empty variant.
pub(crate) static TOPIC_ENTRIES: &[(&str, &[&str])] = &[
    (
        "phishing",
        &[
            "Phishing is when attackers send fake emails or messages pretending to be someone you trust, hoping you'll click a link or hand over credentials. Always check the sender's address and hover over links before clicking.",
            "Phishing attacks try to trick you into giving up passwords or personal data through fake emails and websites. If a message pressures you to act urgently, that's a red flag.",
            "A phishing message imitates a legitimate organisation to steal your information. When in doubt, go to the website directly instead of clicking the link in the email.",
        ],
    ),
    (
        "password",
        &[
            "A strong password is long (12+ characters), unique per site, and not based on dictionary words. A password manager makes this painless.",
            "Never reuse passwords across accounts. One breached site shouldn't unlock your whole life. Use a password manager and let it generate random ones.",
            "Passphrases beat passwords: four random words are easier to remember and harder to crack than 'P@ssw0rd1'.",
        ],
    ),
    (
        "malware",
        &[
            "Malware is any software designed to harm your device or steal data: viruses, trojans, spyware, ransomware. Keep your system updated and don't run installers from untrusted sources.",
            "Most malware arrives through email attachments, cracked software, or malicious ads. An up-to-date system and a healthy dose of suspicion block the vast majority of it.",
        ],
    ),
    (
        "ransomware",
        &[
            "Ransomware encrypts your files and demands payment for the key. The best defence is offline backups: if you can restore, the ransom has no leverage.",
            "Paying a ransomware demand funds the next attack and doesn't guarantee your files back. Regular backups kept disconnected from your machine are the real fix.",
        ],
    ),
    (
        "firewall",
        &[
            "A firewall filters network traffic in and out of your device, blocking connections you didn't ask for. Your OS ships with one: make sure it's on.",
            "Think of a firewall as a doorman for your network connections. It won't stop everything, but it shuts down a whole class of unsolicited attacks.",
        ],
    ),
    (
        "vpn",
        &[
            "A VPN encrypts your traffic between you and the VPN server, which protects you on untrusted networks like public Wi-Fi. It does not make you anonymous.",
            "Use a VPN on public networks so the coffee-shop Wi-Fi can't read your traffic. Pick a provider with a clear no-logging policy.",
        ],
    ),
    (
        "encryption",
        &[
            "Encryption scrambles data so only someone with the key can read it. Full-disk encryption means a stolen laptop is just expensive scrap metal.",
            "Look for the padlock: HTTPS encrypts traffic between you and a website. Without it, anyone on the path can read what you send.",
        ],
    ),
    (
        "mfa",
        &[
            "Multi-factor authentication adds a second proof of identity beyond your password, like an authenticator app code. It stops most account-takeover attacks cold.",
            "Even a stolen password is useless against an account with MFA enabled. Prefer authenticator apps or hardware keys over SMS codes.",
        ],
    ),
    (
        "backup",
        &[
            "Follow the 3-2-1 rule: three copies of your data, on two different media, one kept off-site. Test your restores, an untested backup is a hope, not a plan.",
            "Backups are your safety net against ransomware, theft, and plain hardware failure. Automate them so they actually happen.",
        ],
    ),
    (
        "updates",
        &[
            "Software updates patch security holes that attackers actively exploit. Enable automatic updates; the minor inconvenience beats a compromised machine.",
            "Most successful attacks exploit vulnerabilities that were patched months earlier. Updating promptly closes that window.",
        ],
    ),
    (
        "wifi",
        &[
            "On public Wi-Fi, assume someone is listening: stick to HTTPS sites, avoid logging into sensitive accounts, or use a VPN.",
            "Secure your home Wi-Fi with WPA2 or WPA3, a strong passphrase, and change the router's default admin password.",
        ],
    ),
    (
        "social",
        &[
            "Social engineering attacks people, not computers: urgency, fear, and authority are the attacker's tools. Slow down and verify through a separate channel.",
            "If a caller or email pressures you to act right now, that urgency is the attack. Legitimate organisations let you call back on a number you look up yourself.",
        ],
    ),
    (
        "antivirus",
        &[
            "Antivirus software catches known malware, but it's a seatbelt, not a force field. Combine it with updates, backups, and careful clicking.",
            "Modern operating systems ship with capable built-in antivirus. Keep it enabled and don't install two at once, they fight each other.",
        ],
    ),
    (
        "privacy",
        &[
            "Review app permissions regularly: a flashlight app doesn't need your contacts. Data you never share can't leak.",
            "Think before you post: personal details like birthdays, pet names, and schools are exactly what attackers use to guess passwords and security answers.",
        ],
    ),
    (
        "scam",
        &[
            "If an offer sounds too good to be true, it is. Scammers rely on greed and urgency; verifying independently costs you a minute and saves you a fortune.",
            "Common scams: fake invoices, prize notifications, romance cons, and tech-support pop-ups. None of them survive a calm phone call to the real organisation.",
        ],
    ),
];

/// Meta-topics answered by command handling, excluded from topic browsing.
pub(crate) static META_TOPICS: &[&str] = &["help", "purpose", "how are you"];

/// Canned responses for meta-topics that are still looked up directly.
pub(crate) static META_ENTRIES: &[(&str, &[&str])] = &[
    (
        "purpose",
        &["I'm here to answer everyday cybersecurity questions: ask me about any topic from the help list."],
    ),
    (
        "how are you",
        &["Running at a comfortable operating temperature, thanks for asking!"],
    ),
];

/// Words excluded from keyword extraction.
pub(crate) static STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "am", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "shall",
    "should", "may", "might", "must", "can", "could", "i", "me", "my", "we",
    "our", "you", "your", "he", "she", "it", "they", "them", "his", "her",
    "its", "their", "what", "which", "who", "whom", "this", "that", "these",
    "those", "of", "in", "to", "for", "with", "on", "at", "from", "by",
    "about", "as", "into", "through", "and", "but", "or", "not", "no", "so",
    "if", "then", "than", "too", "very", "just", "also", "up", "out", "all",
    "any", "some", "how", "when", "where", "why", "tell", "explain", "know",
    "more", "please", "something", "anything", "want", "need", "like",
];

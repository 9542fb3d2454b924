//! Static string tables, one per language.

use super::language::Language;

/// Placeholder replaced with the trial count in [`Messages::running_sim`].
const TRIALS_PLACEHOLDER: &str = "{trials}";

/// Every user-facing string for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    /// One-line usage summary, shown on argument errors.
    pub usage: &'static str,
    /// Shown when the trial count is not a positive integer.
    pub invalid_trials: &'static str,
    /// Progress line template; contains `{trials}`.
    pub running_sim: &'static str,
    /// Results box title.
    pub title: &'static str,
    /// Label for the switching row.
    pub switching_door: &'static str,
    /// Label for the staying row.
    pub staying_door: &'static str,
    /// Header above the language list on the help screen.
    pub available_lang: &'static str,
    /// Help screen heading.
    pub help_title: &'static str,
    /// One-paragraph explanation of the game.
    pub help_description: &'static str,
    /// Header above the usage example.
    pub help_usage: &'static str,
    /// Example invocation.
    pub help_usage_example: &'static str,
    /// Header above the flag list.
    pub help_flags_title: &'static str,
    /// Description of `-L`.
    pub help_flag_language: &'static str,
}

impl Messages {
    /// The table for `language`.
    #[must_use]
    pub fn for_language(language: Language) -> &'static Messages {
        match language {
            Language::Pt => &PT,
            Language::En => &EN,
            Language::Es => &ES,
            Language::De => &DE,
            Language::Fr => &FR,
            Language::Ko => &KO,
            Language::Zh => &ZH,
            Language::Ja => &JA,
        }
    }

    /// The progress line for a run of `trials` simulations per strategy.
    #[must_use]
    pub fn running_sim(&self, trials: u64) -> String {
        self.running_sim
            .replace(TRIALS_PLACEHOLDER, &trials.to_string())
    }
}

const PT: Messages = Messages {
    usage: "Uso: monty-hall [-L <idioma>] <número de jogadas>",
    invalid_trials: "Por favor, forneça um número inteiro positivo de jogadas.",
    running_sim: "🎲 Executando {trials} simulações para cada estratégia...",
    title: "🎯 Resultados do Paradoxo de Monty Hall",
    switching_door: "🔄 Trocando de porta",
    staying_door: "🚪 Mantendo a porta",
    available_lang: "Idiomas disponíveis",
    help_title: "Bem-vindo ao Simulador Monty Hall!",
    help_description: "Este programa simula o famoso Paradoxo de Monty Hall para demonstrar\nqual estratégia tem a maior probabilidade de vitória: trocar de porta ou não.",
    help_usage: "COMO USAR",
    help_usage_example: "monty-hall <jogadas>",
    help_flags_title: "FLAGS",
    help_flag_language: "Define o idioma da interface. O idioma escolhido é salvo para futuras execuções.",
};

const EN: Messages = Messages {
    usage: "Usage: monty-hall [-L <language>] <number of trials>",
    invalid_trials: "Please provide a positive integer for the number of trials.",
    running_sim: "🎲 Running {trials} simulations for each strategy...",
    title: "🎯 Monty Hall Paradox Results",
    switching_door: "🔄 Switching door",
    staying_door: "🚪 Staying with door",
    available_lang: "Available languages",
    help_title: "Welcome to the Monty Hall Simulator!",
    help_description: "This program simulates the famous Monty Hall Paradox to demonstrate\nwhich strategy has a higher probability of winning: switching the door or not.",
    help_usage: "HOW TO USE",
    help_usage_example: "monty-hall <trials>",
    help_flags_title: "FLAGS",
    help_flag_language: "Sets the interface language. The chosen language is saved for future runs.",
};

const ES: Messages = Messages {
    usage: "Uso: monty-hall [-L <idioma>] <número de jugadas>",
    invalid_trials: "Por favor, proporcione un número entero positivo de jugadas.",
    running_sim: "🎲 Ejecutando {trials} simulaciones para cada estrategia...",
    title: "🎯 Resultados de la Paradoja de Monty Hall",
    switching_door: "🔄 Cambiando de puerta",
    staying_door: "🚪 Manteniendo la puerta",
    available_lang: "Idiomas disponibles",
    help_title: "¡Bienvenido al Simulador de Monty Hall!",
    help_description: "Este programa simula la famosa Paradoja de Monty Hall para demostrar\nqué estrategia tiene una mayor probabilidad de ganar: cambiar de puerta o no.",
    help_usage: "CÓMO USAR",
    help_usage_example: "monty-hall <jugadas>",
    help_flags_title: "BANDERAS",
    help_flag_language: "Establece el idioma de la interfaz. El idioma elegido se guarda para futuras ejecuciones.",
};

const DE: Messages = Messages {
    usage: "Benutzung: monty-hall [-L <sprache>] <anzahl der versuche>",
    invalid_trials: "Bitte geben Sie eine positive ganze Zahl für die Anzahl der Versuche an.",
    running_sim: "🎲 Führe {trials} Simulationen für jede Strategie durch...",
    title: "🎯 Ergebnisse des Monty-Hall-Problems",
    switching_door: "🔄 Tür wechseln",
    staying_door: "🚪 Bei Tür bleiben",
    available_lang: "Verfügbare Sprachen",
    help_title: "Willkommen beim Monty-Hall-Simulator!",
    help_description: "Dieses Programm simuliert das berühmte Monty-Hall-Problem, um zu zeigen,\nwelche Strategie eine höhere Gewinnwahrscheinlichkeit hat: die Tür wechseln oder nicht.",
    help_usage: "ANWENDUNG",
    help_usage_example: "monty-hall <versuche>",
    help_flags_title: "FLAGS",
    help_flag_language: "Legt die Sprache der Benutzeroberfläche fest. Die gewählte Sprache wird für zukünftige Ausführungen gespeichert.",
};

const FR: Messages = Messages {
    usage: "Usage: monty-hall [-L <langue>] <nombre d'essais>",
    invalid_trials: "Veuillez fournir un entier positif pour le nombre d'essais.",
    running_sim: "🎲 Exécution de {trials} simulations pour chaque stratégie...",
    title: "🎯 Résultats du Problème de Monty Hall",
    switching_door: "🔄 Changer de porte",
    staying_door: "🚪 Garder la porte",
    available_lang: "Langues disponibles",
    help_title: "Bienvenue sur le simulateur Monty Hall !",
    help_description: "Ce programme simule le célèbre problème de Monty Hall pour démontrer\nquelle stratégie a la plus grande probabilité de gagner : changer de porte ou non.",
    help_usage: "COMMENT UTILISER",
    help_usage_example: "monty-hall <essais>",
    help_flags_title: "DRAPEAUX",
    help_flag_language: "Définit la langue de l'interface. La langue choisie est sauvegardée pour les exécutions futures.",
};

const KO: Messages = Messages {
    usage: "사용법: monty-hall [-L <언어>] <시도 횟수>",
    invalid_trials: "시도 횟수로 양의 정수를 입력하십시오.",
    running_sim: "🎲 각 전략에 대해 {trials}개의 시뮬레이션을 실행 중...",
    title: "🎯 몬티 홀 문제 결과",
    switching_door: "🔄 문 바꾸기",
    staying_door: "🚪 문 유지하기",
    available_lang: "사용 가능한 언어",
    help_title: "몬티 홀 시뮬레이터에 오신 것을 환영합니다!",
    help_description: "이 프로그램은 유명한 몬티 홀 문제를 시뮬레이션하여\n문을 바꾸는 전략과 바꾸지 않는 전략 중 어느 쪽이 더 높은 승률을 보이는지 보여줍니다.",
    help_usage: "사용법",
    help_usage_example: "monty-hall <횟수>",
    help_flags_title: "플래그",
    help_flag_language: "인터페이스 언어를 설정합니다. 선택한 언어는 다음 실행을 위해 저장됩니다.",
};

const ZH: Messages = Messages {
    usage: "用法: monty-hall [-L <语言>] <试验次数>",
    invalid_trials: "请输入一个正整数作为试验次数。",
    running_sim: "🎲 正在为每种策略运行 {trials} 次模拟...",
    title: "🎯 蒙提霍尔问题结果",
    switching_door: "🔄 换门",
    staying_door: "🚪 保持原样",
    available_lang: "可用语言",
    help_title: "欢迎来到蒙提霍尔模拟器！",
    help_description: "本程序模拟著名的蒙提霍尔问题，以展示\n哪种策略（换门或不换门）有更高的获胜概率。",
    help_usage: "如何使用",
    help_usage_example: "monty-hall <次数>",
    help_flags_title: "标志",
    help_flag_language: "设置界面语言。所选语言将被保存以备将来运行。",
};

const JA: Messages = Messages {
    usage: "使用法: monty-hall [-L <言語>] <試行回数>",
    invalid_trials: "試行回数には正の整数を指定してください。",
    running_sim: "🎲 各戦略で{trials}回のシミュレーションを実行中...",
    title: "🎯 モンティ・ホール問題の結果",
    switching_door: "🔄 ドアを変更する",
    staying_door: "🚪 ドアを維持する",
    available_lang: "利用可能な言語",
    help_title: "モンティ・ホール・シミュレーターへようこそ！",
    help_description: "このプログラムは、有名なモンティ・ホール問題をシミュレートし、\nドアを交換する戦略と交換しない戦略のどちらが勝率が高いかを実証します。",
    help_usage: "使用法",
    help_usage_example: "monty-hall <回数>",
    help_flags_title: "フラグ",
    help_flag_language: "インターフェースの言語を設定します。選択した言語は次回の実行のために保存されます。",
};

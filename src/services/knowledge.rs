//! Static answer texts and the ordered local rule table.
//!
//! Every trigger is written in folded form (lowercase, no diacritics), the
//! same form [`super::router::fold`] produces for the prompt.

use super::router::{Matcher, Rule, RuleKind};

// =============================================================================
// FIXED REPLIES
// =============================================================================

pub const GREETING_REPLY: &str = "Olá! Eu sou o João, seu assistente virtual da plataforma Somos Um. \
Como posso ajudar você hoje com História e Cultura Afro-Brasileira?";

pub const IDENTITY_REPLY: &str = "Eu sou o João, assistente virtual da plataforma Somos Um, especializado em \
educação, cultura afro-brasileira e na Lei 10.639/2003. Ajudo educadores com planos de aula, recursos \
didáticos e práticas pedagógicas antirracistas.";

pub const OUT_OF_SCOPE_REPLY: &str = "Como assistente especializado em educação da plataforma Somos Um, posso \
ajudar você com questões relacionadas a planos de aula, Lei 10.639/2003, recursos didáticos ou práticas \
pedagógicas. Tem alguma dúvida nessa área?";

/// Substituted when a remote answer is empty or too short to be useful.
pub const DEGENERATE_ANSWER_REPLY: &str = "Desculpe, não consegui elaborar uma resposta completa agora. \
Poderia reformular sua pergunta com mais detalhes sobre o tema ou o nível de ensino?";

/// Picked uniformly when the remote model fails and no keyword fallback applies.
pub const APOLOGY_REPLIES: &[&str] = &[
    "Recebi sua mensagem! O sistema de IA está temporariamente indisponível. Posso ajudar com informações \
sobre a Lei 10.639/2003, capoeira, Zumbi dos Palmares ou recursos da plataforma.",
    "Desculpe, estou com instabilidade técnica no momento. Enquanto isso, pergunte sobre a Lei 10.639/2003, \
quilombos, Dia da Consciência Negra ou os materiais da biblioteca.",
    "No momento não consegui consultar minha base completa. Tente novamente em instantes ou explore os \
planos de aula e o calendário afro-brasileiro da plataforma Somos Um.",
];

// =============================================================================
// RULE TABLE
// =============================================================================

/// Ordered top-down; the first matching rule answers.
pub static RULES: &[Rule] = &[
    // 1. greetings
    Rule {
        name: "greeting",
        kind: RuleKind::Greeting,
        matcher: Matcher::Exact(&["oi", "oie", "ola", "hello", "hi", "bom dia", "boa tarde", "boa noite"]),
        answer: GREETING_REPLY,
    },
    // 2. identity
    Rule {
        name: "identity",
        kind: RuleKind::Identity,
        matcher: Matcher::Any(&[
            "quem e voce",
            "quem es tu",
            "qual seu nome",
            "qual o seu nome",
            "qual e o seu nome",
            "como voce se chama",
            "voce e um robo",
            "o que voce faz",
            "quem e o joao",
        ]),
        answer: IDENTITY_REPLY,
    },
    // 3. menu commands, sent whole by the widget buttons
    Rule {
        name: "menu_help",
        kind: RuleKind::Menu,
        matcher: Matcher::Exact(&["ajuda", "menu", "modulos"]),
        answer: "Posso ajudar com informações sobre educadores, estudantes, comunidade, biblioteca, calendário \
afro-brasileiro ou sobre nossa organização. Sobre o que você gostaria de saber?",
    },
    Rule {
        name: "menu_educator",
        kind: RuleKind::Menu,
        matcher: Matcher::Exact(&["educador", "educadora", "educadores", "area do educador"]),
        answer: "Os educadores têm acesso a planos de aula, materiais didáticos, formação continuada e \
ferramentas para aplicar a Lei 10.639/2003 em sala de aula. Posso abrir a página de educadores para você?",
    },
    Rule {
        name: "menu_student",
        kind: RuleKind::Menu,
        matcher: Matcher::Exact(&["estudante", "estudantes", "area do estudante"]),
        answer: "Os estudantes têm acesso a cursos, materiais de estudo, calendário acadêmico e acompanhamento \
de atividades. Posso abrir a página de estudantes para você?",
    },
    Rule {
        name: "menu_community",
        kind: RuleKind::Menu,
        matcher: Matcher::Exact(&["comunidade", "area da comunidade"]),
        answer: "A comunidade pode participar de projetos sociais, parcerias locais e eventos comunitários \
ligados à cultura afro-brasileira. Posso abrir a página da comunidade para você?",
    },
    Rule {
        name: "menu_library",
        kind: RuleKind::Menu,
        matcher: Matcher::Exact(&["biblioteca"]),
        answer: "A biblioteca oferece acervo digital e físico, sistema de busca, empréstimo de livros e espaço \
de estudo sobre História e Cultura Afro-Brasileira. Posso abrir a página da biblioteca para você?",
    },
    Rule {
        name: "menu_calendar",
        kind: RuleKind::Menu,
        matcher: Matcher::Exact(&["calendario"]),
        answer: "Posso ajudar você a encontrar eventos importantes no calendário afro-brasileiro, como o 13 de \
maio e o 20 de novembro. Que período você gostaria de ver?",
    },
    Rule {
        name: "menu_about",
        kind: RuleKind::Menu,
        matcher: Matcher::Exact(&["quem somos"]),
        answer: "Somos uma organização dedicada à educação e ao desenvolvimento comunitário, conectando \
educadores, estudantes e a comunidade. Posso abrir a página Quem Somos para você?",
    },
    Rule {
        name: "menu_contact",
        kind: RuleKind::Menu,
        matcher: Matcher::Exact(&["contato", "telefone", "email"]),
        answer: "Você pode nos contatar por email: contato@somosum.org, telefone: (11) 1234-5678, ou \
pessoalmente na Rua da Educação, 123.",
    },
    Rule {
        name: "menu_hours",
        kind: RuleKind::Menu,
        matcher: Matcher::Exact(&["horario", "horario de atendimento"]),
        answer: "Nosso horário de atendimento é de segunda a sexta, das 8h às 18h. Fora desse período, \
continue conversando comigo por aqui!",
    },
    Rule {
        name: "menu_avatar",
        kind: RuleKind::Menu,
        matcher: Matcher::Exact(&["foto", "avatar", "imagem"]),
        answer: "Este avatar me representa como assistente virtual da plataforma Somos Um e foi escolhido \
especialmente para representar nossa identidade cultural!",
    },
    // 4. out-of-scope topics
    Rule {
        name: "out_of_scope",
        kind: RuleKind::OutOfScope,
        matcher: Matcher::Any(&[
            "futebol",
            "campeonato",
            "brasileirao",
            "eleicao",
            "eleicoes",
            "bitcoin",
            "criptomoeda",
            "criptomoedas",
            "bolsa de valores",
            "loteria",
            "mega sena",
            "mega-sena",
            "horoscopo",
            "signo",
            "novela",
            "big brother",
            "bbb",
            "previsao do tempo",
            "receita de bolo",
            "apostas",
        ]),
        answer: OUT_OF_SCOPE_REPLY,
    },
    // 5. local knowledge; compound and single-figure rules precede the broader `zumbi`
    Rule {
        name: "leaders_besides_zumbi",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Both(
            &["zumbi", "palmares"],
            &["alem de", "outros lideres", "outras lideres", "outras liderancas", "outros herois", "demais"],
        ),
        answer: "Além de Zumbi, diversas lideranças marcaram a resistência negra no Brasil: Dandara, guerreira \
e estrategista de Palmares; Ganga Zumba, primeiro grande líder do quilombo; Aqualtune, princesa congolesa \
e avó de Zumbi; Tereza de Benguela, rainha do Quilombo do Quariterê; Luísa Mahin, articuladora da Revolta \
dos Malês; e Luiz Gama, advogado abolicionista. Em sala de aula, proponha pesquisas em grupo sobre cada \
liderança, relacionando-as à Lei 10.639/2003.",
    },
    Rule {
        name: "dandara",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Any(&["dandara"]),
        answer: "Dandara dos Palmares foi guerreira e liderança do Quilombo dos Palmares, companheira de Zumbi. \
Dominava técnicas de capoeira e participou da defesa do quilombo. Seu nome está inscrito no Livro dos \
Heróis e Heroínas da Pátria. Ela é uma ótima porta de entrada para discutir o protagonismo das mulheres \
negras na história do Brasil.",
    },
    Rule {
        name: "tereza_de_benguela",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Any(&["tereza de benguela", "teresa de benguela", "quaritere"]),
        answer: "Tereza de Benguela liderou o Quilombo do Quariterê, em Mato Grosso, no século XVIII, \
organizando um parlamento e um sistema de defesa próprios. Em sua homenagem, 25 de julho é o Dia Nacional \
de Tereza de Benguela e da Mulher Negra, data que pode orientar projetos interdisciplinares na escola.",
    },
    Rule {
        name: "zumbi",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Any(&["zumbi", "zumbi dos palmares"]),
        answer: "Zumbi dos Palmares foi o último líder do Quilombo dos Palmares, na Serra da Barriga, atual \
Alagoas. Resistiu por anos às investidas coloniais e foi morto em 20 de novembro de 1695, data que hoje \
marca o Dia Nacional de Zumbi e da Consciência Negra. Para o Fundamental II e Médio, sugiro trabalhar \
fontes históricas sobre Palmares e debater a memória da resistência negra.",
    },
    Rule {
        name: "lei_11645",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Any(&["11.645", "11645", "lei 11.645"]),
        answer: "A Lei 11.645/2008 amplia a Lei 10.639/2003 e torna obrigatório o ensino da História e Cultura \
Afro-Brasileira e Indígena em todas as escolas de ensino fundamental e médio. Posso sugerir atividades que \
integrem as duas temáticas ao currículo!",
    },
    Rule {
        name: "lei_10639",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Any(&["10.639", "10639", "lei 10.639"]),
        answer: "A Lei 10.639/2003 alterou a LDB e tornou obrigatório o ensino da História e Cultura \
Afro-Brasileira nas escolas de ensino fundamental e médio, públicas e privadas, e incluiu o 20 de novembro \
no calendário escolar. Posso ajudar com planos de aula e materiais específicos para aplicá-la!",
    },
    Rule {
        name: "capoeira",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Any(&["capoeira"]),
        answer: "A capoeira é uma expressão cultural afro-brasileira que mistura arte marcial, esporte, cultura \
popular, dança e música, reconhecida como Patrimônio Cultural Imaterial da Humanidade. Para trabalhar no \
Fundamental II, sugiro contextualizar a diáspora africana, realizar uma oficina de movimentos e discutir a \
capoeira como forma de resistência.",
    },
    Rule {
        name: "consciencia_negra",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Any(&["consciencia negra", "20 de novembro"]),
        answer: "O Dia Nacional de Zumbi e da Consciência Negra é celebrado em 20 de novembro, data da morte \
de Zumbi dos Palmares, e tornou-se feriado nacional em 2023. Tenho sugestões de projetos, rodas de conversa \
e atividades para essa data!",
    },
    Rule {
        name: "quilombos",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Any(&["quilombo", "quilombos", "quilombola", "quilombolas"]),
        answer: "Quilombos foram comunidades formadas por pessoas escravizadas que resistiram à escravidão, e \
hoje existem milhares de comunidades remanescentes quilombolas reconhecidas no Brasil. Em sala de aula, \
vale estudar Palmares e aproximar os alunos das comunidades quilombolas atuais e de seus direitos.",
    },
    Rule {
        name: "historia_da_africa",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Any(&["historia da africa", "civilizacoes africanas", "reinos africanos"]),
        answer: "A História da África vai muito além da escravidão: inclui civilizações como o Egito, Kush, \
Axum, o Império do Mali e o Grande Zimbábue. Tenho diversos materiais sobre esses povos. Quer explorar \
algum período específico?",
    },
];

// =============================================================================
// KEYWORD FALLBACKS
// =============================================================================

/// Short local answers for topics that normally go to the remote model.
/// Consulted only when the remote call fails.
pub static FALLBACK_RULES: &[Rule] = &[
    Rule {
        name: "fallback_samba",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Any(&["samba", "musica", "musicas"]),
        answer: "A música afro-brasileira, como o samba, o jongo e o maracatu, é uma herança viva da diáspora \
africana. Uma boa atividade é ouvir e analisar letras em sala, relacionando-as à história do Brasil.",
    },
    Rule {
        name: "fallback_religioes",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Any(&["candomble", "umbanda", "matriz africana", "orixas", "orixa"]),
        answer: "As religiões de matriz africana, como o candomblé e a umbanda, fazem parte do patrimônio \
cultural brasileiro. Trabalhe o tema com respeito à diversidade religiosa e no enfrentamento à intolerância.",
    },
    Rule {
        name: "fallback_antirracismo",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Any(&["racismo", "antirracista", "antirracistas", "antirracismo", "preconceito", "discriminacao"]),
        answer: "A educação antirracista começa por reconhecer o racismo estrutural e valorizar referências \
negras no currículo. Rodas de conversa, análise de notícias e literatura afro-brasileira são bons pontos de \
partida.",
    },
    Rule {
        name: "fallback_plano_de_aula",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Any(&["plano de aula", "planos de aula", "sequencia didatica", "atividade", "atividades"]),
        answer: "Para montar um plano de aula sobre cultura afro-brasileira, defina objetivos ligados à Lei \
10.639/2003, escolha um recurso central (texto, música ou filme), proponha uma atividade prática e avalie \
pela participação e produção dos alunos.",
    },
    Rule {
        name: "fallback_bncc",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Any(&["bncc", "curriculo", "diretrizes curriculares"]),
        answer: "A BNCC e as Diretrizes Curriculares Nacionais para a Educação das Relações Étnico-Raciais \
orientam a inclusão da História e Cultura Afro-Brasileira em todas as áreas do conhecimento.",
    },
    Rule {
        name: "fallback_literatura",
        kind: RuleKind::Knowledge,
        matcher: Matcher::Any(&["literatura", "livro", "livros", "autores negros", "autoras negras"]),
        answer: "Na literatura afro-brasileira, vale conhecer Conceição Evaristo, Carolina Maria de Jesus, \
Machado de Assis, Lima Barreto e Cuti. Trechos curtos dessas obras rendem ótimas leituras comentadas em sala.",
    },
];

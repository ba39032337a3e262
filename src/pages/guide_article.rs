//! Guide article reader.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routed at `/guia/artigo/:id`. The reader carries a small built-in
//! catalog of long-form articles written by the PUFF editorial team;
//! the guide grid links into it by article id. Bodies are stored as
//! markdown and rendered to HTML on the client, with raw HTML events
//! stripped so a body sourced from the backend later cannot inject
//! markup. Unknown ids render a friendly not-found card instead of a
//! route error.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use pulldown_cmark::{Event, Options, Parser, html};

#[cfg(test)]
#[path = "guide_article_test.rs"]
mod guide_article_test;

/// A long-form guide article.
struct Article {
    title: &'static str,
    author: &'static str,
    reading_time: &'static str,
    category: &'static str,
    /// Markdown body.
    body: &'static str,
}

const SOIL_PREPARATION: Article = Article {
    title: "Como Preparar o Solo para Microflorestas",
    author: "Equipe PUFF",
    reading_time: "8 min leitura",
    category: "Preparação do Solo",
    body: "\
## Introdução

A preparação adequada do solo é fundamental para o sucesso de qualquer projeto de \
microfloresta. Um solo bem preparado garante que as mudas tenham as condições ideais para \
crescer e se desenvolver.

## Análise do Solo

Antes de iniciar o plantio, é essencial realizar uma análise completa do solo. Esta análise \
deve incluir:

- pH do solo (ideal entre 6.0 e 7.0)
- Níveis de nutrientes (N, P, K)
- Matéria orgânica presente
- Estrutura e drenagem do solo

## Preparação Física

A preparação física envolve:

1. Limpeza da área, removendo entulhos e plantas invasoras
2. Aração do solo até 30cm de profundidade
3. Correção da drenagem se necessário
4. Criação de canteiros elevados em áreas com encharcamento

## Enriquecimento do Solo

Para enriquecer o solo, adicione:

- Compostagem orgânica (2-3 kg por m²)
- Esterco curtido (1-2 kg por m²)
- Calcário se o pH estiver muito ácido
- Húmus de minhoca para melhorar a estrutura

## Dicas Importantes

Lembre-se sempre de:

- Fazer a preparação no início do período chuvoso
- Aguardar 15 dias após a adubação para plantar
- Manter o solo sempre úmido, mas não encharcado
- Proteger o solo preparado da erosão
",
};

const CERRADO_SPECIES: Article = Article {
    title: "Espécies Nativas do Cerrado",
    author: "Botânico João Silva",
    reading_time: "12 min leitura",
    category: "Espécies Nativas",
    body: "\
## O Bioma Cerrado

O Cerrado é o segundo maior bioma do Brasil, caracterizado por sua rica biodiversidade e \
espécies adaptadas ao clima tropical seco.

## Árvores Nativas Recomendadas

### Ipê Amarelo (Tabebuia alba)

Árvore de médio porte, conhecida por suas flores amarelas vibrantes. Ideal para sombreamento \
e atração de polinizadores.

### Pequi (Caryocar brasiliense)

Árvore frutífera nativa, importante fonte de alimento para a fauna local e comunidades \
tradicionais.

### Buriti (Mauritia flexuosa)

Palmeira de grande porte que indica presença de água no subsolo. Excelente para recuperação \
de áreas úmidas.

## Arbustos e Plantas Baixas

- Candeia (Eremanthus erythropappus)
- Barbatimão (Stryphnodendron adstringens)
- Sempre-viva (Comanthera spp.)

## Época de Plantio

O melhor período para plantio no Cerrado é no início da estação chuvosa (outubro-novembro), \
garantindo água suficiente para o estabelecimento das mudas.
",
};

const DRIP_IRRIGATION: Article = Article {
    title: "Sistema de Irrigação por Gotejamento",
    author: "Eng. Maria Santos",
    reading_time: "6 min leitura",
    category: "Irrigação",
    body: "\
## Vantagens do Gotejamento

O sistema de irrigação por gotejamento é uma das formas mais eficientes de irrigar \
microflorestas, oferecendo:

- Economia de até 50% de água
- Aplicação direta na zona radicular
- Redução de doenças foliares
- Menor crescimento de ervas daninhas

## Componentes do Sistema

1. Reservatório de água
2. Bomba (se necessário)
3. Filtros
4. Tubulação principal
5. Gotejadores
6. Timer automático

## Instalação Passo a Passo

### 1. Planejamento

Desenhe um croqui da área indicando a localização de cada planta e a distribuição das \
tubulações.

### 2. Instalação da Linha Principal

Instale a tubulação principal seguindo o perímetro da área, evitando locais de passagem.

### 3. Distribuição dos Gotejadores

Coloque um gotejador próximo a cada muda, mantendo distância de 20-30cm do caule.

## Manutenção

- Limpeza quinzenal dos filtros
- Verificação semanal dos gotejadores
- Ajuste da programação conforme a estação
",
};

/// Resolve an article by its route id.
fn article_by_id(id: &str) -> Option<&'static Article> {
    match id {
        "1" => Some(&SOIL_PREPARATION),
        "2" => Some(&CERRADO_SPECIES),
        "3" => Some(&DRIP_IRRIGATION),
        _ => None,
    }
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Safety: drop inline/block raw HTML before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[component]
pub fn GuideArticlePage() -> impl IntoView {
    let params = use_params_map();

    let body = move || {
        let id = params.read().get("id").unwrap_or_default();
        match article_by_id(&id) {
            Some(article) => {
                let rendered = render_markdown_html(article.body);
                view! {
                    <article class="article">
                        <div class="article__meta">
                            <span>"🕐 " {article.reading_time}</span>
                            <span>"✍️ " {article.author}</span>
                            <span class="article__category">{article.category}</span>
                        </div>
                        <h1 class="article__title">{article.title}</h1>
                        <div class="article__body" inner_html=rendered></div>
                    </article>
                }
                .into_any()
            }
            None => view! {
                <div class="article article--missing">
                    <h1>"Artigo não encontrado"</h1>
                    <p>"O artigo que você procura não existe."</p>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="article-page">
            <a class="article-page__back" href="/guia">
                "← Voltar ao Guia"
            </a>
            {body}
        </div>
    }
}

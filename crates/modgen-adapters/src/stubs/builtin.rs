//! Built-in stub bodies.
//!
//! One body per [`StubId`], compiled into the binary so a bare install can
//! scaffold without any stub directory. Bodies use the placeholder tokens
//! from `modgen-core::domain::entities::context`; everything else passes
//! through verbatim, including Blade `{{ ... }}` echoes, which never match
//! a token because of their inner spaces.

use modgen_core::application::{AppResult, ports::StubSource};
use modgen_core::domain::StubId;

/// Stub source serving only the compiled-in bodies.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinStubs;

impl BuiltinStubs {
    pub fn new() -> Self {
        Self
    }

    /// The compiled-in body for `id`.
    pub fn body(id: StubId) -> &'static str {
        match id {
            StubId::Controller => CONTROLLER,
            StubId::ApiController => API_CONTROLLER,
            StubId::Model => MODEL,
            StubId::Migration => MIGRATION,
            StubId::Request => REQUEST,
            StubId::Service => SERVICE,
            StubId::ServiceProvider => SERVICE_PROVIDER,
            StubId::WebRoutes => WEB_ROUTES,
            StubId::ApiRoutes => API_ROUTES,
            StubId::View => VIEW,
            StubId::Livewire => LIVEWIRE,
            StubId::LivewireView => LIVEWIRE_VIEW,
        }
    }
}

impl Default for BuiltinStubs {
    fn default() -> Self {
        Self::new()
    }
}

impl StubSource for BuiltinStubs {
    fn fetch(&self, id: StubId) -> AppResult<String> {
        Ok(Self::body(id).to_string())
    }
}

// ── Bodies ───────────────────────────────────────────────────────────────────

const CONTROLLER: &str = r#"<?php

namespace {{EntityNamespace}}\Http\Controllers;

use App\Http\Controllers\Controller;
use {{EntityNamespace}}\Services\{{EntityName}}Service;

class {{EntityName}}Controller extends Controller
{
    public function __construct(private readonly {{EntityName}}Service ${{entityName}}Service)
    {
    }

    public function index()
    {
        return view('{{EntityNameKebab}}::{{EntityNameKebabPlural}}.index', [
            '{{entityName}}List' => $this->{{entityName}}Service->all(),
        ]);
    }
}
"#;

const API_CONTROLLER: &str = r#"<?php

namespace {{EntityNamespace}}\Http\Controllers\Api;

use App\Http\Controllers\Controller;
use Illuminate\Http\JsonResponse;
use {{EntityNamespace}}\Models\{{EntityName}};

class {{EntityName}}Controller extends Controller
{
    public function index(): JsonResponse
    {
        return response()->json({{EntityName}}::query()->latest()->paginate());
    }

    public function show({{EntityName}} ${{entityName}}): JsonResponse
    {
        return response()->json(${{entityName}});
    }
}
"#;

const MODEL: &str = r#"<?php

namespace {{EntityNamespace}}\Models;

use Illuminate\Database\Eloquent\Factories\HasFactory;
use Illuminate\Database\Eloquent\Model;

class {{EntityName}} extends Model
{
    use HasFactory;

    protected $table = '{{EntityNameSnakePlural}}';

    protected $fillable = [];
}
"#;

const MIGRATION: &str = r#"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

return new class extends Migration
{
    public function up(): void
    {
        Schema::create('{{EntityNameSnakePlural}}', function (Blueprint $table) {
            $table->id();
            $table->timestamps();
        });
    }

    public function down(): void
    {
        Schema::dropIfExists('{{EntityNameSnakePlural}}');
    }
};
"#;

const REQUEST: &str = r#"<?php

namespace {{EntityNamespace}}\Http\Requests;

use Illuminate\Foundation\Http\FormRequest;

class {{EntityName}}Request extends FormRequest
{
    public function authorize(): bool
    {
        return true;
    }

    public function rules(): array
    {
        return [];
    }
}
"#;

const SERVICE: &str = r#"<?php

namespace {{EntityNamespace}}\Services;

use Illuminate\Database\Eloquent\Collection;
use {{EntityNamespace}}\Models\{{EntityName}};

class {{EntityName}}Service
{
    public function all(): Collection
    {
        return {{EntityName}}::query()->latest()->get();
    }

    public function find(int $id): ?{{EntityName}}
    {
        return {{EntityName}}::query()->find($id);
    }
}
"#;

const SERVICE_PROVIDER: &str = r#"<?php

namespace {{EntityNamespace}}\Providers;

use Illuminate\Support\ServiceProvider;

class {{EntityName}}ServiceProvider extends ServiceProvider
{
    public function register(): void
    {
        //
    }

    public function boot(): void
    {
        //
    }
}
"#;

const WEB_ROUTES: &str = r#"<?php

use Illuminate\Support\Facades\Route;
use {{EntityNamespace}}\Http\Controllers\{{EntityName}}Controller;

/*
|--------------------------------------------------------------------------
| {{EntityName}} web routes
|--------------------------------------------------------------------------
*/

Route::get('/{{EntityNameKebab}}', [{{EntityName}}Controller::class, 'index'])->name('{{EntityNameKebab}}.index');

// Entity routes will be added here
"#;

const API_ROUTES: &str = r#"<?php

use Illuminate\Support\Facades\Route;
use {{EntityNamespace}}\Http\Controllers\Api\{{EntityName}}Controller;

/*
|--------------------------------------------------------------------------
| {{EntityName}} API routes
|--------------------------------------------------------------------------
*/

Route::get('/{{EntityNameKebab}}', [{{EntityName}}Controller::class, 'index'])->name('api.{{EntityNameKebab}}.index');

// Entity routes will be added here
"#;

const VIEW: &str = r#"@extends('layouts.app')

@section('content')
    <div class="container">
        <h1>{{EntityName}}</h1>

        @foreach (${{entityName}}List ?? [] as ${{entityName}})
            <p>{{ ${{entityName}}->id }}</p>
        @endforeach
    </div>
@endsection
"#;

const LIVEWIRE: &str = r#"<?php

namespace {{EntityNamespace}}\Livewire;

use Livewire\Component;

class {{EntityName}}Component extends Component
{
    public function render()
    {
        return view('{{EntityNameKebab}}::livewire.{{EntityNameKebab}}-component');
    }
}
"#;

const LIVEWIRE_VIEW: &str = r#"<div>
    <h2>{{EntityName}}</h2>
</div>
"#;

#[cfg(test)]
mod tests {
    use modgen_core::domain::{NameVariantSet, StubContext};

    use super::*;

    #[test]
    fn every_stub_has_a_body() {
        for id in StubId::ALL {
            let body = BuiltinStubs::new().fetch(id).unwrap();
            assert!(!body.is_empty(), "stub {id} has no body");
            assert!(body.ends_with('\n'), "stub {id} must end with a newline");
        }
    }

    #[test]
    fn rendered_bodies_carry_no_leftover_tokens() {
        let names = NameVariantSet::derive("BlogPost").unwrap();
        let context = StubContext::for_module(&names);
        for id in StubId::ALL {
            let rendered = context.render(BuiltinStubs::body(id));
            assert!(
                !rendered.contains("{{Entity") && !rendered.contains("{{entity"),
                "stub {id} left a token behind:\n{rendered}"
            );
        }
    }

    #[test]
    fn route_stubs_end_in_the_anchor_comment() {
        use modgen_core::application::services::ROUTE_ANCHOR;

        for id in [StubId::WebRoutes, StubId::ApiRoutes] {
            let body = BuiltinStubs::body(id);
            assert!(body.contains(ROUTE_ANCHOR), "stub {id} is missing the anchor");
        }
    }

    #[test]
    fn route_stubs_seed_the_module_index_route() {
        let names = NameVariantSet::derive("BlogPost").unwrap();
        let context = StubContext::for_module(&names);

        let web = context.render(BuiltinStubs::body(StubId::WebRoutes));
        assert!(web.contains(
            "Route::get('/blog-post', [BlogPostController::class, 'index'])->name('blog-post.index');"
        ));
        assert!(web.contains("use App\\Modules\\BlogPost\\Http\\Controllers\\BlogPostController;"));

        let api = context.render(BuiltinStubs::body(StubId::ApiRoutes));
        assert!(api.contains("->name('api.blog-post.index');"));
        assert!(api.contains("Http\\Controllers\\Api\\BlogPostController;"));
    }

    #[test]
    fn blade_echoes_survive_rendering() {
        let names = NameVariantSet::derive("Blog").unwrap();
        let context = StubContext::for_module(&names);

        let view = context.render(BuiltinStubs::body(StubId::View));
        assert!(view.contains("{{ $blog->id }}"));
        assert!(view.contains("$blogList ?? []"));
    }
}
